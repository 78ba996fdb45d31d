//! Frequency sweep utilities and post-processing helpers.
//!
//! Sweeps only evaluate the closed-form expressions at the requested points.

use num_complex::Complex;

use crate::circuit::Component;
use crate::constants::{angular_frequency, PhysicalConstants};
use crate::errors::CoilError;
use crate::geometry::CoilGeometry;
use crate::math::Scalar;
use crate::optimizer::q_for_frequency;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start` and `stop` (Hz).
///
/// # Errors
///
/// [`CoilError::InvalidArgument`] unless both bounds are positive and finite.
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Result<Vec<Scalar>, CoilError> {
    if !(start_hz.is_finite() && stop_hz.is_finite() && start_hz > 0.0 && stop_hz > 0.0) {
        return Err(CoilError::InvalidArgument(format!(
            "log sweep bounds must be positive, got {start_hz:e}..{stop_hz:e}"
        )));
    }
    Ok(match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    })
}

/// One point of a coil sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Frequency (Hz).
    pub frequency: Scalar,
    /// Value at that frequency.
    pub value: Scalar,
}

/// Evaluates the frequency-dependent Q of `geometry` at each frequency.
///
/// # Errors
///
/// Propagates [`q_for_frequency`] errors for non-positive frequencies.
pub fn q_sweep<I>(
    geometry: &CoilGeometry,
    constants: &PhysicalConstants,
    frequencies: I,
) -> Result<Vec<SweepPoint>, CoilError>
where
    I: IntoIterator<Item = Scalar>,
{
    frequencies
        .into_iter()
        .map(|f| q_for_frequency(geometry, constants, f).map(|value| SweepPoint { frequency: f, value }))
        .collect()
}

/// Impedance of `component` at each frequency (Hz).
#[must_use]
pub fn impedance_sweep<C, I>(component: &C, frequencies: I) -> Vec<(Scalar, Complex<Scalar>)>
where
    C: Component + ?Sized,
    I: IntoIterator<Item = Scalar>,
{
    frequencies
        .into_iter()
        .map(|f| (f, component.impedance(angular_frequency(f))))
        .collect()
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Phase in degrees of complex sequence.
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = Complex<Scalar>>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg().to_degrees()).collect()
}

/// Sweep point with the largest value, if any.
#[must_use]
pub fn peak(points: &[SweepPoint]) -> Option<SweepPoint> {
    points
        .iter()
        .copied()
        .filter(|p| p.value.is_finite())
        .max_by(|a, b| a.value.total_cmp(&b.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::HelicalCoil;
    use crate::geometry::Profile;
    use crate::math::relative_difference;
    use crate::optimizer::local_max_frequency;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn logspace_spans_decades() {
        let v = logspace_hz(1.0e3, 1.0e6, 4).unwrap();
        assert_relative_eq!(v[0], 1.0e3, max_relative = 1e-12);
        assert_relative_eq!(v[1], 1.0e4, max_relative = 1e-12);
        assert_relative_eq!(v[3], 1.0e6, max_relative = 1e-12);
        assert!(logspace_hz(0.0, 1.0e6, 4).is_err());
    }

    #[test]
    fn q_sweep_peaks_near_local_max_frequency() {
        let k = PhysicalConstants::SI;
        let geometry = Profile::Wire.geometry();
        let f_max = local_max_frequency(&geometry, &k);
        let freqs = logspace_hz(f_max / 10.0, f_max * 10.0, 201).unwrap();
        let points = q_sweep(&geometry, &k, freqs).unwrap();
        let best = peak(&points).unwrap();
        // 201 points over two decades: neighbouring samples are 2.3 % apart.
        assert!(relative_difference(best.frequency, f_max) < 0.03);
    }

    #[test]
    fn impedance_sweep_dips_at_resonance() {
        let k = PhysicalConstants::SI;
        let coil = HelicalCoil::new("L1", Profile::Wire.geometry(), k).unwrap();
        let f0 = 1.0 / (2.0 * std::f64::consts::PI * (coil.inductance() * coil.capacitance()).sqrt());
        let sweep = impedance_sweep(&coil, [f0 / 2.0, f0, 2.0 * f0]);
        let m = mag(sweep.iter().map(|(_, z)| *z));
        assert!(m[1] < m[0] && m[1] < m[2]);
        let p = phase_deg(sweep.iter().map(|(_, z)| *z));
        assert!(p[0] < 0.0 && p[2] > 0.0);
    }
}
