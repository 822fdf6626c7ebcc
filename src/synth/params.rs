//! Synthesis configuration
//!
//! Parameters are plain serde data so a full scenario (model plus knobs)
//! can be stored as JSON and replayed.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, Result};
use crate::model::LayeredModel;
use crate::wavelet::{check_frequencies, WaveletKind, DEFAULT_SWEEP_LENGTH};

/// Default sample interval (s)
pub const DEFAULT_DT: f64 = 0.0001;

/// Default maximum depth of the model section (m)
pub const DEFAULT_DMAX: f64 = 200.0;

/// Default Ricker peak frequency (Hz)
pub const DEFAULT_FREQUENCY: f64 = 50.0;

/// Knobs for a single synthesis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisParams {
    /// Source wavelet type
    pub wavelet: WaveletKind,
    /// Wavelet frequencies (Hz), count depends on the wavelet type
    pub frequencies: Vec<f64>,
    /// Wavelet amplitude scale
    pub amplitude: f64,
    /// Attenuate deeper reflections by transmission through shallower interfaces
    pub use_transmission_loss: bool,
    /// Sample interval of the time grid (s)
    pub dt: f64,
    /// Depth of the half-space floor (m)
    pub dmax: f64,
    /// Klauder sweep length (s)
    pub sweep_length: f64,
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            wavelet: WaveletKind::Ricker,
            frequencies: vec![DEFAULT_FREQUENCY],
            amplitude: 1.0,
            use_transmission_loss: true,
            dt: DEFAULT_DT,
            dmax: DEFAULT_DMAX,
            sweep_length: DEFAULT_SWEEP_LENGTH,
        }
    }
}

impl SynthesisParams {
    /// Default parameters for the given wavelet and frequencies
    ///
    /// # Example
    /// ```
    /// use synthseis::{SynthesisParams, WaveletKind};
    ///
    /// // 50 Hz Ricker sampled at 0.5 ms, ignoring transmission loss
    /// let params = SynthesisParams::new(WaveletKind::Ricker, vec![50.0])
    ///     .with_dt(0.0005)
    ///     .with_transmission_loss(false);
    /// assert!(params.validate().is_ok());
    /// assert_eq!(params.dmax, 200.0);
    /// ```
    pub fn new(wavelet: WaveletKind, frequencies: Vec<f64>) -> Self {
        Self {
            wavelet,
            frequencies,
            ..Self::default()
        }
    }

    /// Set the wavelet amplitude scale
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Enable or disable transmission loss through shallower interfaces
    pub fn with_transmission_loss(mut self, enabled: bool) -> Self {
        self.use_transmission_loss = enabled;
        self
    }

    /// Set the sample interval of the time grid (s)
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the depth of the half-space floor (m)
    pub fn with_dmax(mut self, dmax: f64) -> Self {
        self.dmax = dmax;
        self
    }

    /// Set the Klauder sweep length (s)
    pub fn with_sweep_length(mut self, sweep_length: f64) -> Self {
        self.sweep_length = sweep_length;
        self
    }

    /// Check sampling and wavelet parameters
    ///
    /// The depth range is checked against the model during synthesis.
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SeismicError::InvalidSampleInterval { dt: self.dt });
        }
        check_frequencies(self.wavelet, &self.frequencies)?;
        if self.wavelet == WaveletKind::Klauder
            && (!self.sweep_length.is_finite() || self.sweep_length <= 0.0)
        {
            return Err(SeismicError::InvalidSweepLength {
                sweep_length: self.sweep_length,
            });
        }
        Ok(())
    }
}

/// A layered model together with the parameters to synthesize it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub model: LayeredModel,
    #[serde(default)]
    pub params: SynthesisParams,
}

impl Scenario {
    /// Pair a model with the parameters used to synthesize it
    pub fn new(model: LayeredModel, params: SynthesisParams) -> Self {
        Self { model, params }
    }

    /// Parse a scenario from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.params.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
