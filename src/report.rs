//! Plain-text rendering of a [`CoilReport`], metric and imperial side by side.

use std::fmt;

use crate::calculator::CoilReport;
use crate::math::Scalar;
use crate::units::{meters_to_centimeters, meters_to_feet, meters_to_inches, meters_to_millimeters};

const LABEL_WIDTH: usize = 24;

/// Formats a number with three decimals, switching to scientific notation outside
/// [1e-3, 1e6).
#[must_use]
pub fn format_number(value: Scalar) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1.0e-3..1.0e6).contains(&magnitude) {
        format!("{value:.3}")
    } else {
        format!("{value:.3e}")
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$}{value}")
}

fn length_cm_in(meters: Scalar) -> String {
    format!(
        "{} cm ({} in)",
        format_number(meters_to_centimeters(meters)),
        format_number(meters_to_inches(meters))
    )
}

impl fmt::Display for CoilReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.geometry;
        let e = &self.electrical;
        let o = &self.optimization;

        writeln!(f, "Coil geometry")?;
        let wire_mm = format_number(meters_to_millimeters(g.cross_section_radius));
        match self.nominal_awg {
            Some(gauge) => row(
                f,
                "wire radius",
                format_args!("{wire_mm} mm (AWG {gauge}, derived {:.1})", g.awg()),
            )?,
            None => row(f, "wire radius", format_args!("{wire_mm} mm (AWG {:.1})", g.awg()))?,
        }
        row(f, "loop radius", length_cm_in(g.loop_radius))?;
        row(f, "loop diameter", length_cm_in(2.0 * g.loop_radius))?;
        row(f, "pitch", length_cm_in(g.pitch))?;
        row(f, "turns", g.turns)?;
        row(
            f,
            "wire length",
            format_args!(
                "{} cm ({} ft)",
                format_number(meters_to_centimeters(g.wire_length())),
                format_number(meters_to_feet(g.wire_length()))
            ),
        )?;

        writeln!(f)?;
        writeln!(f, "Predictions")?;
        row(f, "resonant frequency", format_args!("{} MHz", format_number(e.resonant_frequency * 1.0e-6)))?;
        row(f, "wavelength", format_args!("{} m", format_number(e.wavelength)))?;
        row(f, "inductance", format_args!("{} uH", format_number(e.self_inductance * 1.0e6)))?;
        row(f, "self capacitance", format_args!("{} pF", format_number(e.self_capacitance * 1.0e12)))?;
        if g.external_capacitance > 0.0 {
            row(
                f,
                "external capacitance",
                format_args!("{} pF", format_number(g.external_capacitance * 1.0e12)),
            )?;
            row(f, "total capacitance", format_args!("{} pF", format_number(e.total_capacitance * 1.0e12)))?;
        }
        row(f, "quality factor", format_number(e.quality_factor))?;

        writeln!(f)?;
        writeln!(f, "Theoretical optima")?;
        match &o.tuning {
            Ok(tuning) => {
                row(f, "optimal pitch", format_args!("{} cm", format_number(meters_to_centimeters(tuning.optimal_pitch))))?;
            }
            Err(err) => row(f, "optimal pitch", format_args!("n/a ({err})"))?,
        }
        row(
            f,
            "global max Q",
            format_args!(
                "{} at loop radius {}",
                format_number(o.global_max_q),
                length_cm_in(o.optimal_loop_radius)
            ),
        )?;
        row(f, "local max Q", format_number(o.local_max_q))?;
        row(f, "max-Q frequency", format_args!("{} MHz", format_number(o.local_max_frequency * 1.0e-6)))?;
        match &o.tuning {
            Ok(tuning) => row(
                f,
                "required capacitance",
                format_args!("{} pF", format_number(tuning.required_capacitance * 1.0e12)),
            )?,
            Err(_) => row(f, "required capacitance", "n/a")?,
        }
        row(f, "damping coefficient", format_args!("{} 1/s", format_number(e.damping)))?;
        row(f, "radiation resistance", format_args!("{} ohm", format_number(e.radiation_resistance)))?;
        row(f, "ohmic resistance", format_args!("{} ohm", format_number(e.ohmic_resistance)))?;

        writeln!(f)?;
        writeln!(f, "Validity")?;
        if self.validation.is_clean() {
            writeln!(f, "  all checks passed")?;
        }
        for check in self.validation.violations() {
            writeln!(f, "  WARNING: {} ({})", check.kind, check.kind.condition())?;
        }
        Ok(())
    }
}

/// Renders right-aligned columns under `headers`, one row per entry.
#[must_use]
pub fn format_table<R>(headers: &[&str], rows: impl IntoIterator<Item = R>) -> String
where
    R: AsRef<[Scalar]>,
{
    let mut out = String::new();
    for header in headers {
        out.push_str(&format!("{header:>16}"));
    }
    out.push('\n');
    for row in rows {
        for value in row.as_ref() {
            out.push_str(&format!("{:>16}", format_number(*value)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculator::compute;
    use crate::geometry::CoilConfig;

    fn line<'a>(text: &'a str, label: &str) -> &'a str {
        text.lines()
            .find(|l| l.trim_start().starts_with(label))
            .unwrap_or_else(|| panic!("no line for {label} in\n{text}"))
    }

    #[test]
    fn number_formatting_switches_to_scientific() {
        assert_eq!(format_number(1.5), "1.500");
        assert_eq!(format_number(0.0), "0.000");
        assert_eq!(format_number(2.5e-6), "2.500e-6");
        assert_eq!(format_number(5.0e28), "5.000e28");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn wire_report_lines() {
        let text = compute(&CoilConfig::default()).unwrap().to_string();
        assert_eq!(line(&text, "turns"), "  turns                   10");
        assert_eq!(line(&text, "loop radius"), "  loop radius             10.000 cm (3.937 in)");
        assert_eq!(line(&text, "wire radius"), "  wire radius             0.322 mm (AWG 22, derived 22.0)");
        assert_eq!(line(&text, "inductance"), "  inductance              73.113 uH");
        assert_eq!(line(&text, "resonant frequency"), "  resonant frequency      1.769 MHz");
        assert!(text.contains("all checks passed"));
        assert!(!text.contains("external capacitance"));
    }

    #[test]
    fn gauge_is_derived_only_without_a_named_wire() {
        let bigwire = compute(&CoilConfig::from_profile(crate::geometry::Profile::BigWire)).unwrap();
        assert_eq!(bigwire.nominal_awg, None);
        assert_eq!(line(&bigwire.to_string(), "wire radius"), "  wire radius             3.175 mm (AWG 2.3)");

        let explicit = CoilConfig::explicit(crate::units::awg_to_radius_meters(18.0), 8.0).loop_radius(0.12);
        let text = compute(&explicit).unwrap().to_string();
        assert_eq!(line(&text, "wire radius"), "  wire radius             0.512 mm (AWG 18.0)");
    }

    #[test]
    fn sections_appear_in_order() {
        let text = compute(&CoilConfig::default()).unwrap().to_string();
        let positions: Vec<usize> = ["Coil geometry", "Predictions", "Theoretical optima", "Validity"]
            .iter()
            .map(|s| text.find(s).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn external_capacitance_and_warnings_are_shown() {
        let config = CoilConfig::explicit(0.001, 0.5)
            .loop_radius(10.0)
            .pitch(0.5)
            .external_capacitance(1.0e-12);
        let text = compute(&config).unwrap().to_string();
        assert_eq!(line(&text, "external capacitance"), "  external capacitance    1.000 pF");
        assert!(text.contains("WARNING: coil radius too large (r >= λ/(6π))"));
        assert!(text.contains("WARNING: capacitance formula out of valid range"));
    }

    #[test]
    fn table_has_header_and_rows() {
        let table = format_table(&["f (Hz)", "Q"], [[1.0e6, 100.0], [2.0e6, 150.0]]);
        assert_eq!(table.lines().count(), 3);
        assert!(table.lines().nth(1).unwrap().ends_with("100.000"));
    }

    #[test]
    fn table_columns_are_right_aligned() {
        let table = format_table(&["f (Hz)", "Q"], [[2.5e7, 42.0]]);
        let expected = format!("{:>16}{:>16}\n{:>16}{:>16}\n", "f (Hz)", "Q", "2.500e7", "42.000");
        assert_eq!(table, expected);
    }
}
