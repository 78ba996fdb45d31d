//! Unit conversions between SI lengths, imperial lengths and American Wire Gauge.
//!
//! AWG is defined by the continuous formula `d = 0.127 mm × 92^((36 − n)/39)`, so the
//! conversion in both directions is closed-form and accepts fractional gauges.

use crate::math::Scalar;

/// Meters per inch (exact).
pub const METERS_PER_INCH: Scalar = 0.0254;
/// Meters per foot (exact).
pub const METERS_PER_FOOT: Scalar = 0.3048;

/// Diameter of AWG 36 in millimeters, the anchor of the gauge scale.
const AWG36_DIAMETER_MM: Scalar = 0.127;
/// Diameter ratio spanning the 39 gauge steps from AWG 36 to AWG 0000.
const AWG_RATIO: Scalar = 92.0;
const AWG_STEPS: Scalar = 39.0;

/// Wire radius in meters for an AWG gauge number.
#[must_use]
pub fn awg_to_radius_meters(gauge: Scalar) -> Scalar {
    let diameter_mm = AWG36_DIAMETER_MM * AWG_RATIO.powf((36.0 - gauge) / AWG_STEPS);
    diameter_mm / 2.0 * 1.0e-3
}

/// Fractional AWG gauge for a wire radius in meters.
#[must_use]
pub fn radius_meters_to_awg(radius_m: Scalar) -> Scalar {
    let diameter_mm = 2.0 * radius_m * 1.0e3;
    36.0 - AWG_STEPS * (diameter_mm / AWG36_DIAMETER_MM).ln() / AWG_RATIO.ln()
}

/// Inches to meters.
#[inline]
#[must_use]
pub fn inches_to_meters(inches: Scalar) -> Scalar {
    inches * METERS_PER_INCH
}

/// Meters to inches.
#[inline]
#[must_use]
pub fn meters_to_inches(meters: Scalar) -> Scalar {
    meters / METERS_PER_INCH
}

/// Meters to feet.
#[inline]
#[must_use]
pub fn meters_to_feet(meters: Scalar) -> Scalar {
    meters / METERS_PER_FOOT
}

/// Meters to centimeters.
#[inline]
#[must_use]
pub fn meters_to_centimeters(meters: Scalar) -> Scalar {
    meters * 1.0e2
}

/// Meters to millimeters.
#[inline]
#[must_use]
pub fn meters_to_millimeters(meters: Scalar) -> Scalar {
    meters * 1.0e3
}
