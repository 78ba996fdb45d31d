//! Baseline physical constants and utility functions.
//!
//! ## Accuracy
//!
//! Constants marked "exact" have zero uncertainty by SI definition (2019 revision).
//! Measured constants (ε₀, μ₀) are provided with 11-12 significant figures, suitable
//! for engineering applications. Material values for copper are room-temperature
//! handbook figures and dominate the uncertainty of every loss estimate in this crate.
//!
//! ## References
//!
//! Physical constants are based on CODATA recommended values:
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>
//! - CODATA 2018 values published May 20, 2019 (following 2019 SI redefinition)

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// Approximate value: 8.8541878128 × 10⁻¹² F/m (11 significant figures).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
/// Approximate value: 1.25663706212 × 10⁻⁶ H/m (12 significant figures).
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;
/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;
/// Characteristic impedance of free space Z₀ in ohms (Ω).
/// Derived from Z₀ = √(μ₀/ε₀) ≈ 376.730313668 Ω.
pub const FREE_SPACE_IMPEDANCE: Scalar = 376.730_313_668;
/// Elementary charge _e_ in coulombs (C).
/// Exact value by 2019 SI definition: 1.602176634 × 10⁻¹⁹ C.
pub const ELEMENTARY_CHARGE: Scalar = 1.602_176_634e-19;
/// Planck constant _h_ in joule seconds (J·s).
/// Exact value by 2019 SI definition: 6.62607015 × 10⁻³⁴ J·s.
pub const PLANCK_CONSTANT: Scalar = 6.626_070_15e-34;
/// Coulomb constant _k_e_ = 1/(4πε₀) in N·m²/C².
pub const COULOMB_CONSTANT: Scalar = 8.987_551_792_3e9;
/// Absolute permeability of copper μ in henries per meter (H/m).
/// Copper is weakly diamagnetic (μᵣ ≈ 0.999994).
pub const COPPER_PERMEABILITY: Scalar = 1.256_629e-6;
/// Electrical resistivity ρ of annealed copper at 20 °C in ohm meters (Ω·m).
pub const COPPER_RESISTIVITY: Scalar = 1.68e-8;

/// Frozen table of the constants every coil formula depends on.
///
/// Formulas take this by reference instead of reading module-level constants so a
/// caller can evaluate the same geometry against, say, a different conductor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Permeability of free space μ₀ (H/m).
    pub vacuum_permeability: Scalar,
    /// Permeability of the conductor (H/m).
    pub conductor_permeability: Scalar,
    /// Speed of light _c_ (m/s).
    pub speed_of_light: Scalar,
    /// Planck constant _h_ (J·s).
    pub planck: Scalar,
    /// Permittivity of free space ε₀ (F/m).
    pub vacuum_permittivity: Scalar,
    /// Free-space impedance Z₀ (Ω), scaling both radiation resistance terms.
    pub free_space_impedance: Scalar,
    /// Elementary charge _e_ (C).
    pub elementary_charge: Scalar,
    /// Coulomb constant _k_e_ (N·m²/C²).
    pub coulomb: Scalar,
    /// Conductor resistivity ρ (Ω·m).
    pub resistivity: Scalar,
    /// Conductor conductivity σ = 1/ρ (S/m).
    pub conductivity: Scalar,
}

impl PhysicalConstants {
    /// SI values with a copper conductor.
    pub const SI: Self = Self {
        vacuum_permeability: VACUUM_PERMEABILITY,
        conductor_permeability: COPPER_PERMEABILITY,
        speed_of_light: SPEED_OF_LIGHT,
        planck: PLANCK_CONSTANT,
        vacuum_permittivity: VACUUM_PERMITTIVITY,
        free_space_impedance: FREE_SPACE_IMPEDANCE,
        elementary_charge: ELEMENTARY_CHARGE,
        coulomb: COULOMB_CONSTANT,
        resistivity: COPPER_RESISTIVITY,
        conductivity: 1.0 / COPPER_RESISTIVITY,
    };

    /// Returns a copy using a different conductor, keeping σ = 1/ρ consistent.
    #[must_use]
    pub fn with_conductor(self, permeability: Scalar, resistivity: Scalar) -> Self {
        Self {
            conductor_permeability: permeability,
            resistivity,
            conductivity: 1.0 / resistivity,
            ..self
        }
    }

    /// Free-space wavelength `c / f` in meters for a frequency in hertz.
    #[inline]
    #[must_use]
    pub fn wavelength(&self, hz: Scalar) -> Scalar {
        self.speed_of_light / hz
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
