//! Layered model definition and validation

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, Result};
use crate::physics::{self, ReflectivitySeries, TimeDepthMap};

use super::logs::{property_logs, PropertyLogs};

/// Serialized form, validated on conversion
#[derive(Debug, Deserialize)]
struct LayeredModelDef {
    depths: Vec<f64>,
    densities: Vec<f64>,
    velocities: Vec<f64>,
}

/// Horizontally layered earth model
///
/// Layer `i` starts at `depths[i]` and has constant density and velocity.
/// The last layer is a half-space with no bottom.
///
/// Invariants (checked on construction and deserialization):
/// - the three sequences have the same, non-zero length
/// - depths are strictly increasing
/// - velocities are finite and positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LayeredModelDef")]
pub struct LayeredModel {
    /// Depth to the top of each layer (m)
    depths: Vec<f64>,
    /// Layer density (kg/m^3)
    densities: Vec<f64>,
    /// Layer P-wave velocity (m/s)
    velocities: Vec<f64>,
}

impl LayeredModel {
    /// Create a model from parallel depth, density and velocity sequences
    ///
    /// # Errors
    /// - `EmptyModel` if there are no layers
    /// - `DimensionMismatch` if the sequences differ in length
    /// - `UnsortedDepths` if a layer top is not below the previous one
    /// - `InvalidVelocity` for zero, negative or non-finite velocities
    pub fn new(depths: Vec<f64>, densities: Vec<f64>, velocities: Vec<f64>) -> Result<Self> {
        if depths.is_empty() {
            return Err(SeismicError::EmptyModel);
        }
        physics::check_length("densities", &densities, depths.len())?;
        physics::check_length("velocities", &velocities, depths.len())?;

        if let Some(index) = depths
            .windows(2)
            .position(|pair| !(pair[1] > pair[0]))
            .map(|i| i + 1)
        {
            return Err(SeismicError::UnsortedDepths { index });
        }
        physics::check_velocities(&velocities)?;

        Ok(Self {
            depths,
            densities,
            velocities,
        })
    }

    /// Three-layer model with the first layer at the surface
    ///
    /// `d2` and `d3` are the tops of the second and third layers.
    pub fn three_layer(d2: f64, d3: f64, densities: [f64; 3], velocities: [f64; 3]) -> Result<Self> {
        Self::new(vec![0.0, d2, d3], densities.to_vec(), velocities.to_vec())
    }

    /// Reference model: tops at 0/50/100 m, increasing density and velocity
    pub fn demo() -> Self {
        Self {
            depths: vec![0.0, 50.0, 100.0],
            densities: vec![2000.0, 2300.0, 2500.0],
            velocities: vec![500.0, 1000.0, 1500.0],
        }
    }

    /// Depth to the top of each layer (m)
    pub fn depths(&self) -> &[f64] {
        &self.depths
    }

    /// Layer densities (kg/m^3)
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Layer velocities (m/s)
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// Number of layers, including the half-space
    pub fn num_layers(&self) -> usize {
        self.depths.len()
    }

    /// Number of interfaces between layers
    pub fn num_interfaces(&self) -> usize {
        self.depths.len() - 1
    }

    /// Top of the half-space (m)
    pub fn deepest_top(&self) -> f64 {
        self.depths[self.depths.len() - 1]
    }

    /// Acoustic impedance of each layer
    pub fn impedance(&self) -> Result<Vec<f64>> {
        physics::impedance(&self.densities, &self.velocities)
    }

    /// Interface reflectivity, optionally with transmission loss
    pub fn reflectivity(&self, use_transmission_loss: bool) -> Result<ReflectivitySeries> {
        physics::reflectivity(
            &self.depths,
            &self.densities,
            &self.velocities,
            use_transmission_loss,
        )
    }

    /// Two-way time to each layer top, with `dmax` as the half-space floor
    pub fn time_depth(&self, dmax: f64) -> Result<TimeDepthMap> {
        physics::time_depth(&self.depths, &self.velocities, dmax)
    }

    /// Step-function property logs down to `dmax`
    pub fn property_logs(&self, dmax: f64, use_transmission_loss: bool) -> Result<PropertyLogs> {
        property_logs(self, dmax, use_transmission_loss)
    }
}

impl Default for LayeredModel {
    fn default() -> Self {
        Self::demo()
    }
}

impl TryFrom<LayeredModelDef> for LayeredModel {
    type Error = SeismicError;

    fn try_from(def: LayeredModelDef) -> Result<Self> {
        Self::new(def.depths, def.densities, def.velocities)
    }
}
