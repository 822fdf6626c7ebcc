//! Depth to two-way travel time conversion

use serde::{Deserialize, Serialize};

use super::check_length;
use crate::error::{SeismicError, Result};

/// Layer-top depths (plus the `dmax` sentinel) and their two-way times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeDepthMap {
    /// Boundary depths in metres, N layer tops followed by `dmax`
    pub depth: Vec<f64>,
    /// Two-way travel time from the surface to each boundary, in seconds
    pub time: Vec<f64>,
}

impl TimeDepthMap {
    /// Two-way times of the N-1 interior interfaces (surface and sentinel excluded)
    pub fn interface_times(&self) -> &[f64] {
        match self.time.len() {
            0..=2 => &[],
            n => &self.time[1..n - 1],
        }
    }

    /// Two-way time to the sentinel depth
    pub fn max_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Two-way time at the surface boundary
    pub fn min_time(&self) -> f64 {
        self.time.first().copied().unwrap_or(0.0)
    }
}

/// Two-way travel time to the top of each layer and to `dmax`.
///
/// Depths are sorted ascending and `dmax` appended as the floor of the
/// half-space. Layer `i` contributes `2 * thickness / velocity[i]`; times
/// are the running sum starting from zero at the first boundary.
///
/// # Errors
/// - `DimensionMismatch` if `velocity` and `depth` differ in length
/// - `EmptyModel` for an empty model
/// - `InvalidVelocity` for a zero, negative or non-finite velocity
/// - `InvalidDepthRange` unless `dmax` lies strictly below every layer top
pub fn time_depth(depth: &[f64], velocity: &[f64], dmax: f64) -> Result<TimeDepthMap> {
    check_length("velocity", velocity, depth.len())?;
    if depth.is_empty() {
        return Err(SeismicError::EmptyModel);
    }
    check_velocities(velocity)?;

    let mut boundaries = depth.to_vec();
    boundaries.sort_by(f64::total_cmp);

    let deepest = boundaries[boundaries.len() - 1];
    if !(dmax > deepest) || !dmax.is_finite() {
        return Err(SeismicError::InvalidDepthRange { dmax, deepest });
    }
    boundaries.push(dmax);

    let mut time = Vec::with_capacity(boundaries.len());
    time.push(0.0);
    let mut elapsed = 0.0;
    for (pair, &v) in boundaries.windows(2).zip(velocity.iter()) {
        elapsed += 2.0 * (pair[1] - pair[0]) / v;
        time.push(elapsed);
    }

    Ok(TimeDepthMap {
        depth: boundaries,
        time,
    })
}

/// Velocities must be finite and strictly positive
pub(crate) fn check_velocities(velocity: &[f64]) -> Result<()> {
    match velocity
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v <= 0.0)
    {
        Some((layer, &value)) => Err(SeismicError::InvalidVelocity { layer, value }),
        None => Ok(()),
    }
}
