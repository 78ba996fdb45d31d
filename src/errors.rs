//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoilError {
    /// Raised when the coil configuration is missing a field, names an unknown
    /// profile, or carries a value outside its physical range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Raised when a formula is evaluated outside the domain where it yields a real,
    /// finite result.
    #[error("{formula} undefined: {detail}")]
    GeometryDomain {
        /// Name of the formula whose precondition failed.
        formula: &'static str,
        /// Which input violated the domain and how.
        detail: String,
    },
}

impl CoilError {
    pub(crate) fn domain(formula: &'static str, detail: impl Into<String>) -> Self {
        Self::GeometryDomain {
            formula,
            detail: detail.into(),
        }
    }

    /// Name of the offending formula for domain errors.
    #[must_use]
    pub fn formula(&self) -> Option<&'static str> {
        match self {
            Self::GeometryDomain { formula, .. } => Some(formula),
            Self::InvalidArgument(_) => None,
        }
    }
}
