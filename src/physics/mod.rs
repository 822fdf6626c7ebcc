//! Layered-earth physics
//!
//! Pure transformations of a layered model:
//! density/velocity -> impedance -> reflectivity, and depth/velocity -> two-way time.

mod impedance;
mod reflectivity;
mod time_depth;

pub use impedance::impedance;
pub use reflectivity::{reflectivity, ReflectivitySeries};
pub use time_depth::{time_depth, TimeDepthMap};

pub(crate) use time_depth::check_velocities;

use crate::error::{SeismicError, Result};

/// Fail with `DimensionMismatch` unless `values` has `expected` entries
pub(crate) fn check_length(name: &'static str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(SeismicError::DimensionMismatch {
            name,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}
