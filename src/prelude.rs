//! Convenience re-exports for coil calculations.

pub use crate::calculator::{compute, compute_with, CoilReport};
pub use crate::circuit::{Component, HelicalCoil};
pub use crate::constants::*;
pub use crate::errors::CoilError;
pub use crate::geometry::{CoilConfig, CoilGeometry, CoilSource, LoopRadius, Profile};
pub use crate::math::{CScalar, Scalar};
pub use crate::model::{ElectricalProperties, LossBreakdown};
pub use crate::optimizer::{
    global_max_frequency, global_max_q, local_max_frequency, local_max_q, local_max_q_closed_form,
    optimal_loop_radius, optimal_spacing_and_capacitance, q_for_frequency, OptimizationResult,
    Tuning,
};
pub use crate::report::format_number;
pub use crate::sweep::{impedance_sweep, linspace, logspace_hz, mag, phase_deg, q_sweep, SweepPoint};
pub use crate::units::{
    awg_to_radius_meters, inches_to_meters, meters_to_inches, radius_meters_to_awg,
};
pub use crate::validation::{CheckKind, ValidationReport, ValidityCheck};
