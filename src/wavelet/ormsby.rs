//! Ormsby wavelet

use std::f64::consts::PI;

use super::{check_frequencies, WaveletKind};
use crate::error::{SeismicError, Result};

/// Normalised sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let pix = PI * x;
        pix.sin() / pix
    }
}

/// Ormsby band-pass wavelet with corner frequencies `f0 < f1 < f2 < f3`.
///
/// The frequencies are sorted before use, so any input order is accepted.
/// Low-cut and high-cut corners must be distinct from their pass corners
/// (`f0 != f1`, `f2 != f3`), otherwise the slopes are undefined.
///
/// ```text
/// w(t) = [(pi f3)^2 sinc^2(f3 t) - (pi f2)^2 sinc^2(f2 t)] / (pi f3 - pi f2)
///      - [(pi f1)^2 sinc^2(f1 t) - (pi f0)^2 sinc^2(f0 t)] / (pi f1 - pi f0)
/// ```
pub fn ormsby(frequencies: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    check_frequencies(WaveletKind::Ormsby, frequencies)?;

    let mut f = [
        frequencies[0],
        frequencies[1],
        frequencies[2],
        frequencies[3],
    ];
    f.sort_by(f64::total_cmp);

    if f[0] == f[1] || f[2] == f[3] {
        return Err(SeismicError::InvalidFrequency {
            reason: format!(
                "Ormsby corners {:?} need distinct low-cut/low-pass and high-pass/high-cut pairs",
                f
            ),
        });
    }

    let pif = f.map(|f| PI * f);
    let high_slope = pif[3] - pif[2];
    let low_slope = pif[1] - pif[0];

    Ok(t.iter()
        .map(|&t| {
            let term = |k: usize| (pif[k] * sinc(f[k] * t)).powi(2);
            (term(3) - term(2)) / high_slope - (term(1) - term(0)) / low_slope
        })
        .collect())
}
