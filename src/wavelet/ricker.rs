//! Ricker wavelet

use std::f64::consts::PI;

use super::{check_frequencies, WaveletKind};
use crate::error::Result;

/// Ricker wavelet with peak frequency `frequencies[0]`.
///
/// `w(t) = (1 - 2 (pi f t)^2) exp(-(pi f t)^2)`, zero phase with `w(0) = 1`.
pub fn ricker(frequencies: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    check_frequencies(WaveletKind::Ricker, frequencies)?;
    let f = frequencies[0];

    Ok(t.iter()
        .map(|&t| {
            let pift2 = (PI * f * t).powi(2);
            (1.0 - 2.0 * pift2) * (-pift2).exp()
        })
        .collect())
}
