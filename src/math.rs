//! Shared numerical primitives and domain-checked helpers.

use crate::errors::CoilError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Square root that reports a domain error instead of returning NaN.
pub(crate) fn checked_sqrt(formula: &'static str, what: &str, value: Scalar) -> Result<Scalar, CoilError> {
    if value.is_nan() || value < 0.0 {
        return Err(CoilError::domain(
            formula,
            format!("square root of negative {what} ({value:e})"),
        ));
    }
    Ok(value.sqrt())
}

/// Rejects zero or non-finite denominators before a division.
pub(crate) fn checked_positive(formula: &'static str, what: &str, value: Scalar) -> Result<Scalar, CoilError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoilError::domain(
            formula,
            format!("{what} must be positive and finite, got {value:e}"),
        ));
    }
    Ok(value)
}

/// Passes finite results through, turning overflow or NaN into a domain error.
pub(crate) fn checked_finite(formula: &'static str, what: &str, value: Scalar) -> Result<Scalar, CoilError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoilError::domain(formula, format!("{what} is not finite ({value})")))
    }
}

/// Relative difference |a − b| / max(|a|, |b|), zero when both are zero.
#[must_use]
pub fn relative_difference(a: Scalar, b: Scalar) -> Scalar {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}
