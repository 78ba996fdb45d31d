//! scmr-coil: resonance, loss and Q estimates for an SCMR helical coil.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use scmr_coil::calculator::compute;
use scmr_coil::circuit::HelicalCoil;
use scmr_coil::constants::PhysicalConstants;
use scmr_coil::geometry::CoilConfig;
use scmr_coil::report::format_table;
use scmr_coil::sweep::{impedance_sweep, logspace_hz, q_sweep};
use scmr_coil::units::{awg_to_radius_meters, inches_to_meters};

#[derive(Parser, Debug)]
#[command(name = "scmr-coil")]
#[command(about = "Closed-form resonance, loss and Q estimates for SCMR helical coils")]
#[command(version)]
#[command(group(ArgGroup::new("wire").args(["wire_radius", "awg", "wire_diameter_in"])))]
struct Args {
    /// Default coil profile (wire, bigwire)
    #[arg(long, conflicts_with = "wire")]
    profile: Option<String>,

    /// Wire cross-section radius in meters
    #[arg(long)]
    wire_radius: Option<f64>,

    /// Wire size as an AWG gauge (fractional allowed)
    #[arg(long)]
    awg: Option<f64>,

    /// Wire diameter in inches
    #[arg(long)]
    wire_diameter_in: Option<f64>,

    /// Number of turns (required with an explicit wire size)
    #[arg(long, requires = "wire")]
    turns: Option<f64>,

    /// Loop radius in meters
    #[arg(long)]
    loop_radius: Option<f64>,

    /// Use the loop radius that maximizes the attainable Q
    #[arg(long, conflicts_with = "loop_radius")]
    optimal_radius: bool,

    /// Pitch (turn-to-turn spacing) in meters
    #[arg(long)]
    pitch: Option<f64>,

    /// External capacitance across the coil in farads
    #[arg(long)]
    external_capacitance: Option<f64>,

    /// Append a log-spaced sweep with this many points from f0/10 to 10·f0
    #[arg(long)]
    sweep: Option<usize>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn wire_radius(args: &Args) -> Option<f64> {
    args.wire_radius
        .or_else(|| args.awg.map(awg_to_radius_meters))
        .or_else(|| args.wire_diameter_in.map(|d| inches_to_meters(d) / 2.0))
}

fn build_config(args: &Args) -> Result<CoilConfig> {
    let mut config = match wire_radius(args) {
        Some(rc) => {
            let turns = args
                .turns
                .context("--turns is required with an explicit wire size")?;
            CoilConfig::explicit(rc, turns)
        }
        None => CoilConfig::profile(args.profile.as_deref().unwrap_or("wire"))?,
    };

    if args.optimal_radius {
        config = config.optimal_loop_radius();
    } else if let Some(r) = args.loop_radius {
        config = config.loop_radius(r);
    }
    if let Some(s) = args.pitch {
        config = config.pitch(s);
    }
    if let Some(c) = args.external_capacitance {
        config = config.external_capacitance(c);
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    info!(?config, "evaluating coil");

    let report = compute(&config).context("Coil calculation failed")?;

    let sweep = match args.sweep {
        Some(points) => {
            let f0 = report.resonant_frequency();
            let freqs = logspace_hz(f0 / 10.0, f0 * 10.0, points)?;
            let q = q_sweep(&report.geometry, &PhysicalConstants::SI, freqs.iter().copied())?;
            let coil = HelicalCoil::new("coil", report.geometry, PhysicalConstants::SI)?;
            let z = impedance_sweep(&coil, freqs.iter().copied());
            let rows: Vec<[f64; 3]> = q
                .iter()
                .zip(&z)
                .map(|(q, (f, z))| [*f, q.value, z.norm()])
                .collect();
            Some(rows)
        }
        None => None,
    };

    if args.json {
        let output = serde_json::json!({
            "report": report,
            "sweep": sweep.as_ref().map(|rows| {
                rows.iter()
                    .map(|[f, q, z]| serde_json::json!({ "frequency": f, "q": q, "impedance": z }))
                    .collect::<Vec<_>>()
            }),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize report")?
        );
    } else {
        print!("{report}");
        if let Some(rows) = sweep {
            println!();
            print!("{}", format_table(&["f (Hz)", "Q(f)", "|Z| (ohm)"], rows));
        }
    }

    Ok(())
}
