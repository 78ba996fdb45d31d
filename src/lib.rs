#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and the frozen table passed to every formula.
pub mod constants;
/// Scalar aliases and domain-checked numeric helpers.
pub mod math;
/// SI, imperial and AWG length conversions.
pub mod units;
/// Coil geometry, named profiles and configuration resolution.
pub mod geometry;
/// Inductance, capacitance, resonance and loss model.
pub mod model;
/// Closed-form Q optima and tuning.
pub mod optimizer;
/// Advisory validity checks on the model's assumptions.
pub mod validation;
/// Equivalent-circuit view of a coil.
pub mod circuit;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// The resolve, model, optimize, validate pipeline.
pub mod calculator;
/// Text report formatting.
pub mod report;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
