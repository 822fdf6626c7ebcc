//! Illustrative noise overlay
//!
//! Adds smoothed Gaussian noise to a finished trace. This is a display aid
//! only and plays no part in the synthesis itself.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg32;

use super::convolution::{convolve, triangular_filter};
use crate::error::{SeismicError, Result};

/// Triangular filter width used for the trace-only display
pub const NOISE_FILTER_WIDTH: usize = 15;

/// Triangular filter width used for the logs-plus-trace display
pub const NOISE_FILTER_WIDTH_WIDE: usize = 21;

/// Create a deterministic noise generator from a seed
pub fn noise_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Return a copy of `trace` with band-limited random noise added.
///
/// White Gaussian noise scaled by `level * max|trace|` is smoothed with a
/// triangular filter of the given width; the filtered sequence is truncated
/// to the trace length before being added.
///
/// # Errors
/// `InvalidNoiseLevel` if `level` is negative or not finite.
pub fn add_noise<R: Rng + ?Sized>(
    trace: &[f64],
    level: f64,
    filter_width: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if !level.is_finite() || level < 0.0 {
        return Err(SeismicError::InvalidNoiseLevel { level });
    }

    let peak = trace.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()));
    let scale = level * peak;
    if scale == 0.0 {
        return Ok(trace.to_vec());
    }

    let white: Vec<f64> = (0..trace.len())
        .map(|_| scale * rng.sample::<f64, _>(StandardNormal))
        .collect();
    let smoothed = convolve(&white, &triangular_filter(filter_width));

    Ok(trace
        .iter()
        .zip(smoothed.iter())
        .map(|(&s, &n)| s + n)
        .collect())
}
