//! Closed-form optima for the coil Q.
//!
//! For a fixed geometry the Q written as a function of an arbitrary drive frequency,
//!
//! ```text
//! Q(f) = 2π f μ r N² (ln(8r/rc) − 2) / (Rz(f) + Rr(f))
//! Rz(f) = √(μ₀ ρ π f) N r / rc
//! Rr(f) = (π/6) Z₀ N² (2π f r / c)⁴
//! ```
//!
//! has a single maximum where the skin-effect term (∝ √f) equals six times the
//! radiation term (∝ f⁴). Substituting that frequency back gives the local maximum Q,
//! and maximizing the result over the loop radius gives `ln(8r/rc) − 2 = 7/3`, the
//! global maximum for a given wire and turn count.

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::constants::PhysicalConstants;
use crate::errors::CoilError;
use crate::geometry::CoilGeometry;
use crate::math::{checked_finite, checked_positive, checked_sqrt, Scalar};

/// Value of `ln(8r/rc) − 2` at the Q-maximizing loop radius.
pub const OPTIMAL_LOG_FACTOR: Scalar = 7.0 / 3.0;

/// Q as a function of drive frequency for the given geometry.
///
/// Uses the skin resistance `Rz = √(μ₀ρπf) N r / rc` and radiation term `(π/6) Z₀ N² (…)⁴`,
/// each twice the resistances in [`crate::model`], so this Q is half of
/// [`LossBreakdown::quality_factor`](crate::model::LossBreakdown) at the same frequency.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when `frequency` is not positive, the loop is too small
/// for a positive `ln(8r/rc) − 2`, or the constants carry a negative resistivity.
pub fn q_for_frequency(
    geometry: &CoilGeometry,
    constants: &PhysicalConstants,
    frequency: Scalar,
) -> Result<Scalar, CoilError> {
    let f = checked_positive("Q(f)", "frequency", frequency)?;
    let log_factor = checked_positive("Q(f)", "ln(8r/rc) − 2", geometry.log_factor())?;
    let (r, rc, n) = (geometry.loop_radius, geometry.cross_section_radius, geometry.turns);

    let skin_radicand = constants.vacuum_permeability * constants.resistivity * PI * f;
    let skin = checked_sqrt("Q(f)", "μ₀ρπf", skin_radicand)? * n * r / rc;
    let radiation = PI / 6.0
        * constants.free_space_impedance
        * n.powi(2)
        * (2.0 * PI * f * r / constants.speed_of_light).powi(4);
    let stored = 2.0 * PI * f * constants.conductor_permeability * r * n.powi(2) * log_factor;

    Ok(stored / (skin + radiation))
}

fn max_q_frequency(
    turns: Scalar,
    cross_section_radius: Scalar,
    loop_radius: Scalar,
    constants: &PhysicalConstants,
) -> Scalar {
    let numerator = constants.speed_of_light.powf(8.0 / 7.0)
        * constants.conductor_permeability.powf(1.0 / 7.0)
        * constants.resistivity.powf(1.0 / 7.0);
    let denominator = 4.0
        * 15.0_f64.powf(2.0 / 7.0)
        * turns.powf(2.0 / 7.0)
        * cross_section_radius.powf(2.0 / 7.0)
        * PI.powf(11.0 / 7.0)
        * loop_radius.powf(6.0 / 7.0);
    numerator / denominator
}

/// Frequency at which [`q_for_frequency`] peaks for this geometry.
#[must_use]
pub fn local_max_frequency(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Scalar {
    max_q_frequency(
        geometry.turns,
        geometry.cross_section_radius,
        geometry.loop_radius,
        constants,
    )
}

/// [`q_for_frequency`] evaluated at [`local_max_frequency`].
///
/// # Errors
///
/// Propagates [`q_for_frequency`] errors.
pub fn local_max_q(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Result<Scalar, CoilError> {
    q_for_frequency(geometry, constants, local_max_frequency(geometry, constants))
}

/// The local maximum Q from the stationarity condition instead of by substitution:
/// `(12/7) μ N rc (ln(8r/rc) − 2) √(π f_max / (μ₀ ρ))`.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when `ln(8r/rc) − 2` is not positive or the
/// resistivity is negative.
pub fn local_max_q_closed_form(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Result<Scalar, CoilError> {
    let log_factor = checked_positive("local max Q", "ln(8r/rc) − 2", geometry.log_factor())?;
    let f_max = local_max_frequency(geometry, constants);
    let root = checked_sqrt(
        "local max Q",
        "π f_max / (μ₀ρ)",
        PI * f_max / (constants.vacuum_permeability * constants.resistivity),
    )?;
    Ok(12.0 / 7.0
        * constants.conductor_permeability
        * geometry.turns
        * geometry.cross_section_radius
        * log_factor
        * root)
}

/// Loop radius `rc·e^(13/3)/8` maximizing the attainable Q for a wire of radius
/// `cross_section_radius`.
#[must_use]
pub fn optimal_loop_radius(cross_section_radius: Scalar) -> Scalar {
    cross_section_radius * (OPTIMAL_LOG_FACTOR + 2.0).exp() / 8.0
}

/// Frequency of the global maximum Q for a wire radius and turn count.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when `turns` or `cross_section_radius` is not positive.
pub fn global_max_frequency(
    turns: Scalar,
    cross_section_radius: Scalar,
    constants: &PhysicalConstants,
) -> Result<Scalar, CoilError> {
    let n = checked_positive("global max Q", "turn count", turns)?;
    let rc = checked_positive("global max Q", "cross-section radius", cross_section_radius)?;
    checked_finite(
        "global max Q",
        "frequency",
        max_q_frequency(n, rc, optimal_loop_radius(rc), constants),
    )
}

/// Highest Q attainable over all loop radii and frequencies for a wire radius and
/// turn count.
///
/// # Errors
///
/// See [`global_max_frequency`]; also fails for a negative resistivity.
pub fn global_max_q(turns: Scalar, cross_section_radius: Scalar, constants: &PhysicalConstants) -> Result<Scalar, CoilError> {
    let f = global_max_frequency(turns, cross_section_radius, constants)?;
    let root = checked_sqrt(
        "global max Q",
        "π f / (μ₀ρ)",
        PI * f / (constants.vacuum_permeability * constants.resistivity),
    )?;
    Ok(12.0 / 7.0 * OPTIMAL_LOG_FACTOR * constants.conductor_permeability * turns * cross_section_radius * root)
}

/// Capacitance and pitch that tune a coil to a target frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Frequency the coil is tuned to (Hz).
    pub target_frequency: Scalar,
    /// Total capacitance needed at that frequency (F).
    pub required_capacitance: Scalar,
    /// Pitch whose self-capacitance equals the required capacitance (m).
    pub optimal_pitch: Scalar,
}

/// Solves `Ct = 1 / (4π² L f²)` and inverts the self-capacitance formula for the pitch
/// `s = 2 rc cosh(2π² r ε₀ / Ct)` that realizes it.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when the inductance, frequency or either radius is not
/// positive, or when the required pitch overflows.
pub fn optimal_spacing_and_capacitance(
    inductance: Scalar,
    loop_radius: Scalar,
    cross_section_radius: Scalar,
    target_frequency: Scalar,
    constants: &PhysicalConstants,
) -> Result<Tuning, CoilError> {
    let l = checked_positive("required capacitance", "inductance", inductance)?;
    let f = checked_positive("required capacitance", "target frequency", target_frequency)?;
    let r = checked_positive("optimal pitch", "loop radius", loop_radius)?;
    let rc = checked_positive("optimal pitch", "cross-section radius", cross_section_radius)?;
    let required_capacitance = 1.0 / (4.0 * l * PI.powi(2) * f.powi(2));

    let argument = 2.0 * PI.powi(2) * r * constants.vacuum_permittivity / required_capacitance;
    let optimal_pitch = checked_finite(
        "optimal pitch",
        "2·rc·cosh(2π² r ε₀ / Ct)",
        2.0 * rc * argument.cosh(),
    )?;

    Ok(Tuning {
        target_frequency: f,
        required_capacitance,
        optimal_pitch,
    })
}

/// Theoretical optima for one coil.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Frequency maximizing Q for the realized geometry (Hz).
    pub local_max_frequency: Scalar,
    /// Q at that frequency, by substitution.
    pub local_max_q: Scalar,
    /// Q at that frequency, from the stationarity condition.
    pub local_max_q_closed_form: Scalar,
    /// Loop radius maximizing Q for this wire and turn count (m).
    pub optimal_loop_radius: Scalar,
    /// Frequency of the global maximum (Hz).
    pub global_max_frequency: Scalar,
    /// Highest Q attainable for this wire and turn count.
    pub global_max_q: Scalar,
    /// Capacitance and pitch tuning the coil to the local-max frequency; the error is
    /// kept when no finite pitch realizes it.
    pub tuning: Result<Tuning, CoilError>,
}

impl OptimizationResult {
    /// Computes every optimum for `geometry`, whose self-inductance is `inductance`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the Q formulas; tuning failures are stored instead.
    pub fn evaluate(
        geometry: &CoilGeometry,
        constants: &PhysicalConstants,
        inductance: Scalar,
    ) -> Result<Self, CoilError> {
        let local_max_frequency = local_max_frequency(geometry, constants);
        let local_max_q = q_for_frequency(geometry, constants, local_max_frequency)?;
        let tuning = optimal_spacing_and_capacitance(
            inductance,
            geometry.loop_radius,
            geometry.cross_section_radius,
            local_max_frequency,
            constants,
        );
        if let Err(err) = &tuning {
            warn!(%err, "coil cannot be tuned to its max-Q frequency");
        }

        let result = Self {
            local_max_frequency,
            local_max_q,
            local_max_q_closed_form: local_max_q_closed_form(geometry, constants)?,
            optimal_loop_radius: optimal_loop_radius(geometry.cross_section_radius),
            global_max_frequency: global_max_frequency(geometry.turns, geometry.cross_section_radius, constants)?,
            global_max_q: global_max_q(geometry.turns, geometry.cross_section_radius, constants)?,
            tuning,
        };
        debug!(
            f_max = result.local_max_frequency,
            q_local = result.local_max_q,
            q_global = result.global_max_q,
            "computed optima"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Profile;
    use crate::math::relative_difference;
    use crate::model::{self_inductance, LossBreakdown};

    const K: PhysicalConstants = PhysicalConstants::SI;

    #[test]
    fn local_max_frequency_is_a_maximum() {
        let geometry = Profile::Wire.geometry();
        let f_max = local_max_frequency(&geometry, &K);
        let peak = q_for_frequency(&geometry, &K, f_max).unwrap();
        for factor in [0.5, 0.9, 0.99, 1.01, 1.1, 2.0] {
            let q = q_for_frequency(&geometry, &K, f_max * factor).unwrap();
            assert!(q < peak, "Q({factor}·f_max) = {q} exceeds peak {peak}");
        }
    }

    #[test]
    fn wire_profile_optima() {
        let geometry = Profile::Wire.geometry();
        assert_relative_eq!(local_max_frequency(&geometry, &K), 38.376e6, max_relative = 1.0e-3);
        assert_relative_eq!(local_max_q(&geometry, &K).unwrap(), 3049.2, max_relative = 1.0e-3);
        assert_relative_eq!(
            global_max_q(geometry.turns, geometry.cross_section_radius, &K).unwrap(),
            5444.3,
            max_relative = 1.0e-3
        );
    }

    #[test]
    fn both_local_max_routes_agree() {
        for profile in Profile::ALL {
            let geometry = profile.geometry();
            let substituted = local_max_q(&geometry, &K).unwrap();
            let closed = local_max_q_closed_form(&geometry, &K).unwrap();
            assert!(
                relative_difference(substituted, closed) < 0.01,
                "{profile}: {substituted} vs {closed}"
            );
        }
    }

    #[test]
    fn model_q_at_local_max_is_twice_optimizer_q() {
        // The model normalizes Q = ω/2Γ with Γ = (Ro + Rr)/2L and uses half the
        // optimizer's loss resistances, so the two differ by exactly two up to the
        // coil-height radiation term.
        let geometry = Profile::Wire.geometry();
        let f_max = local_max_frequency(&geometry, &K);
        let model = LossBreakdown::at_frequency(&geometry, &K, f_max).unwrap();
        let optimizer = local_max_q(&geometry, &K).unwrap();
        assert!(relative_difference(model.quality_factor, 2.0 * optimizer) < 0.01);
    }

    #[test]
    fn global_max_equals_local_max_at_optimal_radius() {
        let geometry = Profile::BigWire.geometry();
        assert_relative_eq!(
            global_max_q(geometry.turns, geometry.cross_section_radius, &K).unwrap(),
            local_max_q_closed_form(&geometry, &K).unwrap(),
            max_relative = 1.0e-12
        );
        assert_relative_eq!(
            global_max_q(geometry.turns, geometry.cross_section_radius, &K).unwrap(),
            8357.7,
            max_relative = 1.0e-3
        );
    }

    #[test]
    fn global_max_bounds_local_max_over_radius() {
        let (rc, turns) = (1.0e-3, 4.0);
        let best = global_max_q(turns, rc, &K).unwrap();
        for r in [0.002, 0.005, 0.0095, 0.02, 0.1, 1.0] {
            let geometry = CoilGeometry::new(rc, r, turns, 3.0e-3).unwrap();
            assert!(local_max_q_closed_form(&geometry, &K).unwrap() <= best * (1.0 + 1.0e-12));
        }
    }

    #[test]
    fn tuning_realizes_target_frequency() {
        let geometry = Profile::BigWire.geometry();
        let l = self_inductance(&geometry, &K);
        let f = local_max_frequency(&geometry, &K);
        let tuning = optimal_spacing_and_capacitance(l, geometry.loop_radius, geometry.cross_section_radius, f, &K)
            .unwrap();
        assert_relative_eq!(tuning.required_capacitance, 2.318e-12, max_relative = 1.0e-3);
        assert_relative_eq!(tuning.optimal_pitch, 0.031_37, max_relative = 1.0e-3);

        // Winding at the optimal pitch lands the resonance on the target.
        let retuned = CoilGeometry { pitch: tuning.optimal_pitch, ..geometry };
        let c = crate::model::self_capacitance(&retuned, &K).unwrap();
        assert_relative_eq!(c, tuning.required_capacitance, max_relative = 1.0e-9);
    }

    #[test]
    fn tuning_rejects_degenerate_inputs() {
        assert!(optimal_spacing_and_capacitance(0.0, 0.1, 1.0e-3, 1.0e6, &K).is_err());
        assert!(optimal_spacing_and_capacitance(1.0e-6, 0.1, 1.0e-3, 0.0, &K).is_err());
        let overflow = optimal_spacing_and_capacitance(1.0e-3, 10.0, 1.0e-3, 1.0e9, &K).unwrap_err();
        assert_eq!(overflow.formula(), Some("optimal pitch"));
    }

    #[test]
    fn tuning_rejects_non_positive_radii() {
        for (r, rc) in [(0.1, -1.0e-3), (0.1, 0.0), (-0.1, 1.0e-3), (0.0, 1.0e-3)] {
            let err = optimal_spacing_and_capacitance(1.0e-6, r, rc, 1.0e6, &K).unwrap_err();
            assert_eq!(err.formula(), Some("optimal pitch"), "r = {r}, rc = {rc}");
        }
    }

    #[test]
    fn loop_smaller_than_log_threshold_has_no_q() {
        // 8r/rc = 7.2 < e², so ln(8r/rc) − 2 < 0.
        let geometry = CoilGeometry::new(1.0e-3, 0.9e-3, 1.0, 3.0e-3).unwrap();
        assert!(geometry.log_factor() < 0.0);
        assert_eq!(local_max_q(&geometry, &K).unwrap_err().formula(), Some("Q(f)"));
        assert_eq!(
            local_max_q_closed_form(&geometry, &K).unwrap_err().formula(),
            Some("local max Q")
        );
        assert!(q_for_frequency(&geometry, &K, 1.0e6).is_err());
    }

    #[test]
    fn global_max_rejects_degenerate_wire() {
        for (turns, rc) in [(0.0, 1.0e-3), (-2.0, 1.0e-3), (4.0, 0.0), (4.0, Scalar::NAN)] {
            let err = global_max_q(turns, rc, &K).unwrap_err();
            assert_eq!(err.formula(), Some("global max Q"), "N = {turns}, rc = {rc}");
            assert!(global_max_frequency(turns, rc, &K).is_err());
        }
        assert!(global_max_q(4.0, 1.0e-3, &K).unwrap() > 0.0);
    }

    #[test]
    fn q_for_frequency_rejects_zero_frequency() {
        assert!(q_for_frequency(&Profile::Wire.geometry(), &K, 0.0).is_err());
    }

    #[test]
    fn q_for_frequency_rejects_negative_resistivity() {
        let broken = K.with_conductor(K.conductor_permeability, -1.0e-8);
        let err = q_for_frequency(&Profile::Wire.geometry(), &broken, 1.0e6).unwrap_err();
        assert_eq!(err.formula(), Some("Q(f)"));
    }
}
