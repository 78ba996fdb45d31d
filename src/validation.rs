//! Advisory checks against the operating range the coil formulas assume.

use std::f64::consts::PI;
use std::fmt;

use tracing::warn;

use crate::geometry::CoilGeometry;
use crate::math::Scalar;
use crate::model::ElectricalProperties;

/// Lower edge of the frequency band the loss model is trusted in (Hz).
pub const MIN_VALID_FREQUENCY: Scalar = 100.0e3;
/// Upper edge of the frequency band the loss model is trusted in (Hz).
pub const MAX_VALID_FREQUENCY: Scalar = 100.0e6;
/// Largest spacing ratio `s/(2rc)` for which the capacitance formula is trusted.
pub const MAX_SPACING_RATIO: Scalar = 2.0;

/// The individual validity conditions.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Near-field assumption: `r < λ/(6π)`.
    RadiusTooLarge,
    /// Quasi-static assumption: `2π r N < λ/3`.
    CoilLengthTooLarge,
    /// Capacitance formula range: `s/(2rc) <= 2`.
    PitchSpacingOutOfRange,
    /// Empirical band: `100 kHz < f₀ < 100 MHz`.
    FrequencyOutOfRange,
}

impl CheckKind {
    /// Every check, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::RadiusTooLarge,
        Self::CoilLengthTooLarge,
        Self::PitchSpacingOutOfRange,
        Self::FrequencyOutOfRange,
    ];

    /// Warning printed when the check is violated.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::RadiusTooLarge => "coil radius too large",
            Self::CoilLengthTooLarge => "coil length too large",
            Self::PitchSpacingOutOfRange => "capacitance formula out of valid range",
            Self::FrequencyOutOfRange => "resonant frequency may be out of range",
        }
    }

    /// Condition that triggers the warning.
    #[must_use]
    pub const fn condition(self) -> &'static str {
        match self {
            Self::RadiusTooLarge => "r >= λ/(6π)",
            Self::CoilLengthTooLarge => "2πrN >= λ/3",
            Self::PitchSpacingOutOfRange => "s/(2rc) > 2",
            Self::FrequencyOutOfRange => "f0 <= 100 kHz or f0 >= 100 MHz",
        }
    }

    fn violated(self, geometry: &CoilGeometry, props: &ElectricalProperties) -> bool {
        let lambda = props.wavelength;
        match self {
            Self::RadiusTooLarge => geometry.loop_radius >= lambda / (6.0 * PI),
            Self::CoilLengthTooLarge => geometry.wire_length() >= lambda / 3.0,
            Self::PitchSpacingOutOfRange => geometry.spacing_ratio() > MAX_SPACING_RATIO,
            Self::FrequencyOutOfRange => {
                props.resonant_frequency <= MIN_VALID_FREQUENCY
                    || props.resonant_frequency >= MAX_VALID_FREQUENCY
            }
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one check.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityCheck {
    /// Which condition was tested.
    pub kind: CheckKind,
    /// True when the coil falls outside the formula's range.
    pub violated: bool,
}

/// All four checks, always evaluated, in [`CheckKind::ALL`] order.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Individual outcomes.
    pub checks: [ValidityCheck; 4],
}

impl ValidationReport {
    /// Evaluates every check. Violations are logged and never abort the calculation.
    #[must_use]
    pub fn evaluate(geometry: &CoilGeometry, props: &ElectricalProperties) -> Self {
        let checks = CheckKind::ALL.map(|kind| {
            let violated = kind.violated(geometry, props);
            if violated {
                warn!(condition = kind.condition(), "{}", kind.message());
            }
            ValidityCheck { kind, violated }
        });
        Self { checks }
    }

    /// Whether `kind` was violated.
    #[must_use]
    pub fn is_violated(&self, kind: CheckKind) -> bool {
        self.checks.iter().any(|c| c.kind == kind && c.violated)
    }

    /// Violated checks only.
    pub fn violations(&self) -> impl Iterator<Item = &ValidityCheck> {
        self.checks.iter().filter(|c| c.violated)
    }

    /// True when no check was violated.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PhysicalConstants;
    use crate::geometry::Profile;

    fn report_for(geometry: &CoilGeometry) -> ValidationReport {
        let props = ElectricalProperties::evaluate(geometry, &PhysicalConstants::SI).unwrap();
        ValidationReport::evaluate(geometry, &props)
    }

    #[test]
    fn profiles_are_within_range() {
        for profile in Profile::ALL {
            let report = report_for(&profile.geometry());
            assert!(report.is_clean(), "{profile}: {report:?}");
        }
    }

    #[test]
    fn order_is_stable() {
        let report = report_for(&Profile::Wire.geometry());
        let kinds: Vec<_> = report.checks.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, CheckKind::ALL.to_vec());
    }

    #[test]
    fn huge_loop_radius_breaks_near_field() {
        let geometry = CoilGeometry::new(1.0e-3, 10.0, 0.5, 0.5).unwrap();
        let report = report_for(&geometry);
        assert!(report.is_violated(CheckKind::RadiusTooLarge));
        // Wide pitch is reported independently.
        assert!(report.is_violated(CheckKind::PitchSpacingOutOfRange));
        assert!(!report.is_violated(CheckKind::FrequencyOutOfRange));
    }

    #[test]
    fn long_wire_breaks_quasi_static() {
        // Tight loops on a wide pitch: 2πrN ≈ 1.2 · λ/3 at f₀ ≈ 64 MHz.
        let geometry = CoilGeometry::new(1.0e-3, 1.5e-3, 200.0, 5.0e-3).unwrap();
        let report = report_for(&geometry);
        assert!(report.is_violated(CheckKind::CoilLengthTooLarge));
        assert!(report.is_violated(CheckKind::PitchSpacingOutOfRange));
        assert!(!report.is_violated(CheckKind::RadiusTooLarge));
        assert!(!report.is_violated(CheckKind::FrequencyOutOfRange));
        assert_eq!(report.violations().count(), 2);
    }

    #[test]
    fn low_resonance_is_flagged() {
        let geometry = CoilGeometry::new(1.0e-3, 10.0, 2.0, 2.5e-3)
            .unwrap()
            .with_external_capacitance(10.0e-9)
            .unwrap();
        let report = report_for(&geometry);
        assert!(report.is_violated(CheckKind::FrequencyOutOfRange));
        assert_eq!(report.violations().count(), 1);
    }

    #[test]
    fn messages_match_conditions() {
        assert_eq!(CheckKind::RadiusTooLarge.to_string(), "coil radius too large");
        assert_eq!(CheckKind::PitchSpacingOutOfRange.condition(), "s/(2rc) > 2");
    }
}
