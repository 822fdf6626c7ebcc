//! Interface reflection coefficients and transmission loss

use serde::{Deserialize, Serialize};

use super::{check_length, impedance};
use crate::error::{SeismicError, Result};

/// Reflection coefficients at each of the N-1 interfaces of an N-layer model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectivitySeries {
    /// Coefficients after transmission loss (equal to `raw` when loss is off)
    pub effective: Vec<f64>,
    /// Normal-incidence coefficients `(Z[i+1] - Z[i]) / (Z[i+1] + Z[i])`
    pub raw: Vec<f64>,
}

impl ReflectivitySeries {
    /// Number of interfaces
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the model had no interfaces
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Reflectivity of a layered model.
///
/// When `use_transmission_loss` is set, interfaces are attenuated top down:
/// each coefficient is scaled by `prod_{j < i} (1 - E[j]^2)`, where `E[j]` is
/// the already-attenuated coefficient of shallower interface `j`. The raw
/// series is returned untouched alongside.
///
/// # Errors
/// - `DimensionMismatch` if the three arrays differ in length
/// - `EmptyModel` if there are no layers
/// - `DegenerateInterface` if two adjacent impedances sum to zero
pub fn reflectivity(
    depth: &[f64],
    density: &[f64],
    velocity: &[f64],
    use_transmission_loss: bool,
) -> Result<ReflectivitySeries> {
    check_length("density", density, depth.len())?;
    check_length("velocity", velocity, depth.len())?;
    if depth.is_empty() {
        return Err(SeismicError::EmptyModel);
    }

    let z = impedance(density, velocity)?;
    let raw = z
        .windows(2)
        .enumerate()
        .map(|(interface, pair)| {
            let (upper, lower) = (pair[0], pair[1]);
            let sum = upper + lower;
            if sum == 0.0 {
                return Err(SeismicError::DegenerateInterface {
                    interface,
                    upper,
                    lower,
                });
            }
            Ok((lower - upper) / sum)
        })
        .collect::<Result<Vec<f64>>>()?;

    let effective = if use_transmission_loss {
        transmission_attenuated(&raw)
    } else {
        raw.clone()
    };

    Ok(ReflectivitySeries { effective, raw })
}

/// Apply cumulative two-way transmission loss, shallowest interface first.
///
/// Each interface passes on `1 - E^2` of its own attenuated coefficient `E`,
/// so the result depends on the order of the fold.
fn transmission_attenuated(raw: &[f64]) -> Vec<f64> {
    raw.iter()
        .scan(1.0_f64, |transmission, &r| {
            let attenuated = r * *transmission;
            *transmission *= 1.0 - attenuated * attenuated;
            Some(attenuated)
        })
        .collect()
}
