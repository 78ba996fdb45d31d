//! Lumped electrical model of a helical coil.
//!
//! The coil is treated as a thin-wire loop antenna of `N` turns: its self-inductance
//! and inter-turn capacitance fix the resonance, and the skin-effect and radiation
//! resistances set the damping.
//!
//! ## References
//!
//! - A. Kurs et al., "Wireless Power Transfer via Strongly Coupled Magnetic
//!   Resonances", Science 317 (2007), supporting online material.

use std::f64::consts::PI;

use tracing::debug;

use crate::constants::PhysicalConstants;
use crate::errors::CoilError;
use crate::geometry::CoilGeometry;
use crate::math::{checked_finite, checked_positive, Scalar};

/// Self-inductance `L = μ₀ r N² (ln(8r/rc) − 2)` in henries.
///
/// Non-positive when `8r/rc <= e²`; callers dividing by it check the sign.
#[must_use]
pub fn self_inductance(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Scalar {
    constants.vacuum_permeability
        * geometry.loop_radius
        * geometry.turns.powi(2)
        * geometry.log_factor()
}

/// Inter-turn self-capacitance `C = 2π² r ε₀ / ln(sc + √(sc² − 1))` with `sc = s/(2rc)`.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when `sc <= 1`, i.e. the pitch does not exceed the
/// wire diameter.
pub fn self_capacitance(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Result<Scalar, CoilError> {
    let sc = geometry.spacing_ratio();
    if sc.is_nan() || sc <= 1.0 {
        return Err(CoilError::domain(
            "self-capacitance",
            format!(
                "pitch {:e} m must exceed the wire diameter {:e} m (spacing ratio {sc:.4} <= 1)",
                geometry.pitch,
                2.0 * geometry.cross_section_radius
            ),
        ));
    }
    // acosh(sc) = ln(sc + √(sc² − 1))
    let capacitance = 2.0 * PI.powi(2) * geometry.loop_radius * constants.vacuum_permittivity / sc.acosh();
    checked_finite("self-capacitance", "capacitance", capacitance)
}

/// Resonant frequency `f₀ = 1 / (2π √(L C))` in hertz.
///
/// # Errors
///
/// [`CoilError::GeometryDomain`] when either `L` or `C` is not positive.
pub fn resonant_frequency(inductance: Scalar, capacitance: Scalar) -> Result<Scalar, CoilError> {
    let l = checked_positive("resonant frequency", "inductance", inductance)?;
    let c = checked_positive("resonant frequency", "total capacitance", capacitance)?;
    Ok(1.0 / (2.0 * PI * (l * c).sqrt()))
}

/// Skin-effect resistance `Ro = √(μ₀ω / 2σ) · l / (4π rc)` in ohms.
#[must_use]
pub fn ohmic_resistance(geometry: &CoilGeometry, constants: &PhysicalConstants, omega: Scalar) -> Scalar {
    let surface_resistance = (constants.vacuum_permeability * omega / (2.0 * constants.conductivity)).sqrt();
    surface_resistance * geometry.wire_length() / (4.0 * PI * geometry.cross_section_radius)
}

/// Radiation resistance in ohms: the magnetic-dipole term of the `N` loops plus the
/// electric-dipole term of the coil height.
///
/// `Rr = Z₀ [ (π/12) N² (ωr/c)⁴ + (2/(3π³)) (ωh/c)² ]`
#[must_use]
pub fn radiation_resistance(geometry: &CoilGeometry, constants: &PhysicalConstants, omega: Scalar) -> Scalar {
    let c = constants.speed_of_light;
    let magnetic = PI / 12.0 * geometry.turns.powi(2) * (omega * geometry.loop_radius / c).powi(4);
    let electric = 2.0 / (3.0 * PI.powi(3)) * (omega * geometry.height() / c).powi(2);
    constants.free_space_impedance * (magnetic + electric)
}

/// Losses of a coil driven at one frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossBreakdown {
    /// Drive frequency (Hz).
    pub frequency: Scalar,
    /// Angular frequency ω (rad/s).
    pub angular_frequency: Scalar,
    /// Skin-effect resistance (Ω).
    pub ohmic_resistance: Scalar,
    /// Radiation resistance (Ω).
    pub radiation_resistance: Scalar,
    /// Damping coefficient Γ = (Ro + Rr) / 2L (1/s).
    pub damping: Scalar,
    /// Quality factor Q = ω / 2Γ.
    pub quality_factor: Scalar,
}

impl LossBreakdown {
    /// Evaluates the loss model at `frequency` for a coil of inductance `inductance`.
    ///
    /// # Errors
    ///
    /// [`CoilError::GeometryDomain`] for a non-positive frequency or inductance.
    pub fn with_inductance(
        geometry: &CoilGeometry,
        constants: &PhysicalConstants,
        inductance: Scalar,
        frequency: Scalar,
    ) -> Result<Self, CoilError> {
        let frequency = checked_positive("coil losses", "frequency", frequency)?;
        let inductance = checked_positive("damping coefficient", "inductance", inductance)?;
        let omega = 2.0 * PI * frequency;
        let ohmic_resistance = ohmic_resistance(geometry, constants, omega);
        let radiation_resistance = radiation_resistance(geometry, constants, omega);
        let damping = (ohmic_resistance + radiation_resistance) / (2.0 * inductance);
        Ok(Self {
            frequency,
            angular_frequency: omega,
            ohmic_resistance,
            radiation_resistance,
            damping,
            quality_factor: omega / (2.0 * damping),
        })
    }

    /// Evaluates the loss model off resonance, using the coil's own self-inductance.
    ///
    /// # Errors
    ///
    /// See [`LossBreakdown::with_inductance`].
    pub fn at_frequency(
        geometry: &CoilGeometry,
        constants: &PhysicalConstants,
        frequency: Scalar,
    ) -> Result<Self, CoilError> {
        Self::with_inductance(geometry, constants, self_inductance(geometry, constants), frequency)
    }
}

/// Electrical quantities derived from a coil geometry at its own resonance.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectricalProperties {
    /// Self-inductance L (H).
    pub self_inductance: Scalar,
    /// Inter-turn capacitance C (F).
    pub self_capacitance: Scalar,
    /// Self plus external capacitance (F).
    pub total_capacitance: Scalar,
    /// Resonant frequency f₀ (Hz).
    pub resonant_frequency: Scalar,
    /// Angular frequency ω = 2π f₀ (rad/s).
    pub angular_frequency: Scalar,
    /// Free-space wavelength λ = c / f₀ (m).
    pub wavelength: Scalar,
    /// Wavenumber k = 2π / λ (rad/m).
    pub wavenumber: Scalar,
    /// Skin-effect resistance at f₀ (Ω).
    pub ohmic_resistance: Scalar,
    /// Radiation resistance at f₀ (Ω).
    pub radiation_resistance: Scalar,
    /// Damping coefficient Γ (1/s).
    pub damping: Scalar,
    /// Quality factor Q.
    pub quality_factor: Scalar,
}

impl ElectricalProperties {
    /// Runs the model for `geometry`.
    ///
    /// # Errors
    ///
    /// [`CoilError::GeometryDomain`] when the self-capacitance is undefined for the
    /// pitch, or the inductance is not positive.
    pub fn evaluate(geometry: &CoilGeometry, constants: &PhysicalConstants) -> Result<Self, CoilError> {
        let self_inductance = self_inductance(geometry, constants);
        let self_capacitance = self_capacitance(geometry, constants)?;
        let total_capacitance = self_capacitance + geometry.external_capacitance;
        let resonant_frequency = resonant_frequency(self_inductance, total_capacitance)?;
        let wavelength = constants.wavelength(resonant_frequency);
        let losses = LossBreakdown::with_inductance(geometry, constants, self_inductance, resonant_frequency)?;

        debug!(
            inductance = self_inductance,
            capacitance = total_capacitance,
            frequency = resonant_frequency,
            q = losses.quality_factor,
            "evaluated coil model"
        );

        Ok(Self {
            self_inductance,
            self_capacitance,
            total_capacitance,
            resonant_frequency,
            angular_frequency: losses.angular_frequency,
            wavelength,
            wavenumber: 2.0 * PI / wavelength,
            ohmic_resistance: losses.ohmic_resistance,
            radiation_resistance: losses.radiation_resistance,
            damping: losses.damping,
            quality_factor: losses.quality_factor,
        })
    }
}
