//! Klauder wavelet

use std::f64::consts::PI;

use super::{check_frequencies, WaveletKind};
use crate::error::{SeismicError, Result};

/// Default Vibroseis sweep length in seconds
pub const DEFAULT_SWEEP_LENGTH: f64 = 5.0;

/// Klauder wavelet with the default 5 s sweep
pub fn klauder(frequencies: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    klauder_with_sweep(frequencies, t, DEFAULT_SWEEP_LENGTH)
}

/// Klauder wavelet for a linear sweep from `frequencies[0]` to `frequencies[1]`.
///
/// With sweep rate `k = (f1 - f0) / T` and centre frequency `fc = (f0 + f1) / 2`:
///
/// ```text
/// w(t) = sin(pi k t (T - t)) / (pi k t) * cos(2 pi fc t)
/// ```
///
/// The envelope tends to `T - t` as `pi k t -> 0`, which covers both `t = 0`
/// and a zero-width sweep (`f0 == f1`).
pub fn klauder_with_sweep(frequencies: &[f64], t: &[f64], sweep_length: f64) -> Result<Vec<f64>> {
    check_frequencies(WaveletKind::Klauder, frequencies)?;
    if !sweep_length.is_finite() || sweep_length <= 0.0 {
        return Err(SeismicError::InvalidSweepLength { sweep_length });
    }

    let k = (frequencies[1] - frequencies[0]) / sweep_length;
    let fc = (frequencies[0] + frequencies[1]) / 2.0;

    Ok(t.iter()
        .map(|&t| {
            let pikt = PI * k * t;
            let envelope = if pikt.abs() < f64::EPSILON {
                sweep_length - t
            } else {
                (pikt * (sweep_length - t)).sin() / pikt
            };
            envelope * (2.0 * PI * fc * t).cos()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_finite_at_zero() {
        let w = klauder(&[10.0, 40.0], &[0.0]).unwrap();
        assert_eq!(w, vec![DEFAULT_SWEEP_LENGTH]);
    }

    #[test]
    fn test_continuous_through_zero() {
        let w = klauder(&[10.0, 40.0], &[-1e-7, 0.0, 1e-7]).unwrap();
        assert!(w.iter().all(|v| v.is_finite()));
        assert_relative_eq!(w[0], w[1], epsilon = 1e-5);
        assert_relative_eq!(w[2], w[1], epsilon = 1e-5);
    }

    #[test]
    fn test_zero_width_sweep() {
        let t = [-0.01, 0.0, 0.02];
        let w = klauder(&[30.0, 30.0], &t).unwrap();
        for (&ti, &wi) in t.iter().zip(&w) {
            let expected = (DEFAULT_SWEEP_LENGTH - ti) * (2.0 * PI * 30.0 * ti).cos();
            assert_relative_eq!(wi, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sweep_length_scales_peak() {
        let w = klauder_with_sweep(&[10.0, 40.0], &[0.0], 8.0).unwrap();
        assert_relative_eq!(w[0], 8.0);
    }

    #[test]
    fn test_sweep_direction_does_not_change_shape() {
        let t = [-0.02, -0.005, 0.0, 0.013];
        let up = klauder(&[10.0, 40.0], &t).unwrap();
        let down = klauder(&[40.0, 10.0], &t).unwrap();
        for (a, b) in up.iter().zip(&down) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rejects_single_frequency() {
        let result = klauder(&[10.0], &[0.0]);
        assert!(matches!(
            result,
            Err(SeismicError::InvalidParameterCount { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_sweep_length() {
        let result = klauder_with_sweep(&[10.0, 40.0], &[0.0], 0.0);
        assert!(matches!(result, Err(SeismicError::InvalidSweepLength { .. })));
    }
}
