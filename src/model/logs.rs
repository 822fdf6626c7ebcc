//! Step-function property logs for depth plots

use serde::{Deserialize, Serialize};

use super::LayeredModel;
use crate::error::{SeismicError, Result};
use crate::physics::{self, check_length};

/// Expand a piecewise-constant log into step-function plotting arrays.
///
/// Each depth and value is repeated twice; the depth axis then drops its
/// first entry and gains `dmax`, so layer `i` is drawn from `depths[i]` to
/// `depths[i + 1]` (or `dmax`). Both outputs have `2 * N` entries.
///
/// ```text
/// depths [0, 50]  log [a, b]  dmax 200
/// -> depth [0, 50, 50, 200]
/// -> log   [a, a, b, b]
/// ```
pub fn plot_log(depths: &[f64], log: &[f64], dmax: f64) -> Result<(Vec<f64>, Vec<f64>)> {
    check_length("log", log, depths.len())?;

    let depth_plot: Vec<f64> = depths
        .iter()
        .flat_map(|&d| [d, d])
        .skip(1)
        .chain(std::iter::once(dmax))
        .collect();
    let log_plot: Vec<f64> = log.iter().flat_map(|&v| [v, v]).collect();

    Ok((depth_plot, log_plot))
}

/// Depth-domain logs of a layered model, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyLogs {
    /// Step-function depth axis (2N entries, ends at `dmax`)
    pub depth: Vec<f64>,
    /// Density log on the step axis
    pub density: Vec<f64>,
    /// Velocity log on the step axis
    pub velocity: Vec<f64>,
    /// Impedance log on the step axis
    pub impedance: Vec<f64>,
    /// Effective reflectivity at each interface (N-1 entries)
    pub reflectivity: Vec<f64>,
}

/// Build density, velocity, impedance and reflectivity logs down to `dmax`
///
/// # Errors
/// `InvalidDepthRange` unless `dmax` lies below the half-space top, plus any
/// error from the reflectivity stage.
pub fn property_logs(
    model: &LayeredModel,
    dmax: f64,
    use_transmission_loss: bool,
) -> Result<PropertyLogs> {
    let deepest = model.deepest_top();
    if !(dmax > deepest) || !dmax.is_finite() {
        return Err(SeismicError::InvalidDepthRange { dmax, deepest });
    }

    let (depth, density) = plot_log(model.depths(), model.densities(), dmax)?;
    let (_, velocity) = plot_log(model.depths(), model.velocities(), dmax)?;
    let impedance = physics::impedance(&density, &velocity)?;
    let reflectivity = model.reflectivity(use_transmission_loss)?.effective;

    Ok(PropertyLogs {
        depth,
        density,
        velocity,
        impedance,
        reflectivity,
    })
}
