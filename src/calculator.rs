//! End-to-end evaluation: resolve, model, optimize, validate.

use tracing::instrument;

use crate::constants::PhysicalConstants;
use crate::errors::CoilError;
use crate::geometry::{CoilConfig, CoilGeometry};
use crate::math::Scalar;
use crate::model::ElectricalProperties;
use crate::optimizer::OptimizationResult;
use crate::validation::ValidationReport;

/// Everything computed for one coil. Formats as the text report via `Display`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoilReport {
    /// Resolved geometry.
    pub geometry: CoilGeometry,
    /// Named AWG gauge of the wire, when the coil came from a profile that has one.
    pub nominal_awg: Option<Scalar>,
    /// Electrical properties at resonance.
    pub electrical: ElectricalProperties,
    /// Theoretical optima.
    pub optimization: OptimizationResult,
    /// Validity checks.
    pub validation: ValidationReport,
}

impl CoilReport {
    /// Self-inductance (H).
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.electrical.self_inductance
    }

    /// Self-capacitance (F).
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.electrical.self_capacitance
    }

    /// Self plus external capacitance (F).
    #[must_use]
    pub fn total_capacitance(&self) -> Scalar {
        self.electrical.total_capacitance
    }

    /// Resonant frequency (Hz).
    #[must_use]
    pub fn resonant_frequency(&self) -> Scalar {
        self.electrical.resonant_frequency
    }

    /// Quality factor at resonance.
    #[must_use]
    pub fn quality_factor(&self) -> Scalar {
        self.electrical.quality_factor
    }
}

/// Evaluates `config` with SI copper constants.
///
/// # Errors
///
/// [`CoilError::InvalidArgument`] for an unresolvable configuration and
/// [`CoilError::GeometryDomain`] when the resonance is undefined for the geometry.
pub fn compute(config: &CoilConfig) -> Result<CoilReport, CoilError> {
    compute_with(config, &PhysicalConstants::SI)
}

/// Evaluates `config` against an explicit constants table.
///
/// # Errors
///
/// See [`compute`].
#[instrument(level = "debug", skip(constants), err)]
pub fn compute_with(config: &CoilConfig, constants: &PhysicalConstants) -> Result<CoilReport, CoilError> {
    let geometry = config.resolve()?;
    let electrical = ElectricalProperties::evaluate(&geometry, constants)?;
    let optimization = OptimizationResult::evaluate(&geometry, constants, electrical.self_inductance)?;
    let validation = ValidationReport::evaluate(&geometry, &electrical);
    Ok(CoilReport {
        geometry,
        nominal_awg: config.nominal_awg(),
        electrical,
        optimization,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::validation::CheckKind;

    #[test]
    fn wire_profile_scenario() {
        let report = compute(&CoilConfig::default()).unwrap();
        assert!(report.inductance() > 10.0e-6 && report.inductance() < 100.0e-6);
        assert!(report.resonant_frequency() > 1.0e6 && report.resonant_frequency() < 10.0e6);
        assert!(report.validation.is_clean());
        assert!(!report.validation.is_violated(CheckKind::FrequencyOutOfRange));
        assert_eq!(report.total_capacitance(), report.capacitance());
    }

    #[test]
    fn touching_turns_fail_self_capacitance() {
        let config = CoilConfig::explicit(0.001, 5.0).loop_radius(0.01).pitch(0.0001);
        let err = compute(&config).unwrap_err();
        assert!(matches!(
            err,
            CoilError::GeometryDomain {
                formula: "self-capacitance",
                ..
            }
        ));
    }

    #[test]
    fn huge_radius_still_computes() {
        let config = CoilConfig::explicit(0.001, 0.5).loop_radius(10.0).pitch(0.5);
        let report = compute(&config).unwrap();
        assert!(report.validation.is_violated(CheckKind::RadiusTooLarge));
        assert!(report.quality_factor().is_finite());
        assert_relative_eq!(report.resonant_frequency(), 1.7567e6, max_relative = 1.0e-3);
    }

    #[test]
    fn unknown_profile_never_reaches_the_model() {
        let err = CoilConfig::profile("helix").map(|c| compute(&c)).unwrap_err();
        assert!(matches!(err, CoilError::InvalidArgument(_)));
    }

    #[test]
    fn compute_is_idempotent() {
        let config = CoilConfig::from_profile(crate::geometry::Profile::BigWire).external_capacitance(5.0e-12);
        let first = compute(&config).unwrap();
        let second = compute(&config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.quality_factor().to_bits(), second.quality_factor().to_bits());
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn untunable_coil_still_reports() {
        // A hundred turns resonate far below their max-Q frequency; the pitch that
        // would close the gap overflows.
        let config = CoilConfig::explicit(0.0005, 100.0).loop_radius(0.1).pitch(0.0015);
        let report = compute(&config).unwrap();
        assert!(report.optimization.tuning.is_err());
        assert!(report.to_string().contains("n/a"));
    }
}
