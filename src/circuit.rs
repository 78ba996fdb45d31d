//! Lumped equivalent circuit of a resonant coil.

use num_complex::Complex;

use crate::constants::PhysicalConstants;
use crate::errors::CoilError;
use crate::geometry::CoilGeometry;
use crate::math::{CScalar, Scalar};
use crate::model::{ohmic_resistance, radiation_resistance, self_capacitance, self_inductance};

/// Trait implemented by anything that can provide a frequency-domain impedance.
pub trait Component {
    /// Returns the component's impedance for an angular frequency `omega` (rad/s).
    fn impedance(&self, omega: Scalar) -> CScalar;

    /// Human-readable identifier.
    fn name(&self) -> &str;
}

/// A helical coil seen from its terminals: series R(ω), L and C.
///
/// The resistance is frequency dependent (skin effect plus radiation) and the
/// capacitance includes any external capacitor.
#[derive(Debug, Clone)]
pub struct HelicalCoil {
    name: String,
    geometry: CoilGeometry,
    constants: PhysicalConstants,
    inductance: Scalar,
    capacitance: Scalar,
}

impl HelicalCoil {
    /// Builds the equivalent circuit for `geometry`.
    ///
    /// # Errors
    ///
    /// [`CoilError::GeometryDomain`] when the self-capacitance is undefined.
    pub fn new(
        name: impl Into<String>,
        geometry: CoilGeometry,
        constants: PhysicalConstants,
    ) -> Result<Self, CoilError> {
        let inductance = self_inductance(&geometry, &constants);
        let capacitance = self_capacitance(&geometry, &constants)? + geometry.external_capacitance;
        Ok(Self {
            name: name.into(),
            geometry,
            constants,
            inductance,
            capacitance,
        })
    }

    /// Series inductance (H).
    #[must_use]
    pub fn inductance(&self) -> Scalar {
        self.inductance
    }

    /// Series capacitance (F).
    #[must_use]
    pub fn capacitance(&self) -> Scalar {
        self.capacitance
    }

    /// Loss resistance Ro(ω) + Rr(ω) (Ω).
    #[must_use]
    pub fn resistance(&self, omega: Scalar) -> Scalar {
        ohmic_resistance(&self.geometry, &self.constants, omega)
            + radiation_resistance(&self.geometry, &self.constants, omega)
    }
}

impl Component for HelicalCoil {
    fn impedance(&self, omega: Scalar) -> CScalar {
        if omega.abs() < Scalar::EPSILON {
            return Complex::new(f64::INFINITY, 0.0);
        }
        let reactance = omega * self.inductance - 1.0 / (omega * self.capacitance);
        Complex::new(self.resistance(omega), reactance)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
