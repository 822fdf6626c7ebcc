//! Uniform time grids and nearest-sample lookup

use crate::error::{SeismicError, Result};

/// Upper bound on the number of samples in any generated time grid
pub const MAX_GRID_SAMPLES: usize = 10_000_000;

/// Build a half-open uniform grid `[start, stop)` with spacing `step`.
///
/// The sample count is `ceil((stop - start) / step)` and sample `i` sits at
/// `start + i * step`, so grids built from the same arguments are always
/// identical. An empty or inverted range yields an empty grid.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let span = (stop - start) / step;
    if !(span > 0.0) || !span.is_finite() {
        return Vec::new();
    }

    let n = span.ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// [`arange`] that refuses grids longer than [`MAX_GRID_SAMPLES`].
///
/// # Errors
/// `TooManySamples` when the span holds more samples than the limit (an
/// overflowing span included).
pub fn bounded_arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    let span = (stop - start) / step;
    if span.is_nan() || span > MAX_GRID_SAMPLES as f64 {
        return Err(SeismicError::TooManySamples {
            requested: span.ceil(),
            limit: MAX_GRID_SAMPLES,
        });
    }
    Ok(arange(start, stop, step))
}

/// Index of the grid sample closest to `target`.
///
/// Ties resolve to the lowest index. Returns `None` for an empty grid.
pub fn nearest_index(grid: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, &value) in grid.iter().enumerate() {
        let distance = (value - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }

    best.map(|(i, _)| i)
}
