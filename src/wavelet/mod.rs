//! Source Wavelet Library
//!
//! Three source pulses are available, selected through [`WaveletKind`]:
//! - Ricker: zero-phase Mexican hat, one peak frequency
//! - Ormsby: trapezoidal band-pass, four corner frequencies
//! - Klauder: autocorrelation of a linear Vibroseis sweep, two frequencies
//!
//! Each generator is a pure function of its frequencies and a time axis.

mod klauder;
mod ormsby;
mod ricker;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SeismicError, Result};
use crate::signal::bounded_arange;

pub use klauder::{klauder, klauder_with_sweep, DEFAULT_SWEEP_LENGTH};
pub use ormsby::ormsby;
pub use ricker::ricker;

/// Wavelet type selector
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum WaveletKind {
    /// Mexican hat wavelet, one frequency
    #[default]
    Ricker,
    /// Band-pass wavelet, four corner frequencies
    Ormsby,
    /// Sweep autocorrelation wavelet, two frequencies
    Klauder,
}

impl WaveletKind {
    /// All wavelet kinds, in display order
    pub const ALL: [WaveletKind; 3] = [
        WaveletKind::Ricker,
        WaveletKind::Ormsby,
        WaveletKind::Klauder,
    ];

    /// Number of frequencies the wavelet is parameterised by
    pub fn frequency_count(self) -> usize {
        match self {
            WaveletKind::Ricker => 1,
            WaveletKind::Ormsby => 4,
            WaveletKind::Klauder => 2,
        }
    }

    /// Typical frequencies (Hz) when none are given
    pub fn default_frequencies(self) -> Vec<f64> {
        match self {
            WaveletKind::Ricker => vec![50.0],
            WaveletKind::Ormsby => vec![5.0, 10.0, 40.0, 50.0],
            WaveletKind::Klauder => vec![10.0, 40.0],
        }
    }

    /// Upper-case identifier
    pub fn name(self) -> &'static str {
        match self {
            WaveletKind::Ricker => "RICKER",
            WaveletKind::Ormsby => "ORMSBY",
            WaveletKind::Klauder => "KLAUDER",
        }
    }

    /// Evaluate the wavelet on the time axis `t`.
    ///
    /// `sweep_length` is only read by the Klauder wavelet.
    pub fn evaluate(self, frequencies: &[f64], t: &[f64], sweep_length: f64) -> Result<Vec<f64>> {
        match self {
            WaveletKind::Ricker => ricker(frequencies, t),
            WaveletKind::Ormsby => ormsby(frequencies, t),
            WaveletKind::Klauder => klauder_with_sweep(frequencies, t, sweep_length),
        }
    }
}

impl fmt::Display for WaveletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveletKind {
    type Err = SeismicError;

    fn from_str(s: &str) -> Result<Self> {
        WaveletKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SeismicError::UnknownWavelet {
                name: s.to_string(),
            })
    }
}

/// Evaluate a wavelet of the given kind on `t` (Klauder uses the default sweep length)
pub fn wavelet(kind: WaveletKind, frequencies: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    kind.evaluate(frequencies, t, DEFAULT_SWEEP_LENGTH)
}

/// Check the frequency count for `kind` and that every frequency is finite and positive
pub(crate) fn check_frequencies(kind: WaveletKind, frequencies: &[f64]) -> Result<()> {
    let expected = kind.frequency_count();
    if frequencies.len() != expected {
        return Err(SeismicError::InvalidParameterCount {
            wavelet: kind,
            expected,
            found: frequencies.len(),
        });
    }

    if let Some(&bad) = frequencies.iter().find(|f| !f.is_finite() || **f <= 0.0) {
        return Err(SeismicError::InvalidFrequency {
            reason: format!("{} Hz is not a positive finite frequency", bad),
        });
    }

    Ok(())
}

/// Time support `[-2 / min(f), 2 / min(f))` sampled every `dt` seconds
pub fn wavelet_time_axis(frequencies: &[f64], dt: f64) -> Result<Vec<f64>> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SeismicError::InvalidSampleInterval { dt });
    }

    let f_min = frequencies.iter().copied().fold(f64::INFINITY, f64::min);
    if !f_min.is_finite() || f_min <= 0.0 {
        return Err(SeismicError::InvalidFrequency {
            reason: "wavelet support needs a positive lowest frequency".to_string(),
        });
    }

    let half_width = 2.0 / f_min;
    bounded_arange(-half_width, half_width, dt)
}

/// A sampled source wavelet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wavelet {
    /// Sample times in seconds, uniformly spaced
    pub time: Vec<f64>,
    /// Amplitude at each sample time
    pub amplitude: Vec<f64>,
}

impl Wavelet {
    /// Generate a wavelet over its own support at sample interval `dt`
    pub fn generate(
        kind: WaveletKind,
        frequencies: &[f64],
        dt: f64,
        sweep_length: f64,
    ) -> Result<Self> {
        check_frequencies(kind, frequencies)?;
        let time = wavelet_time_axis(frequencies, dt)?;
        let amplitude = kind.evaluate(frequencies, &time, sweep_length)?;
        Ok(Self { time, amplitude })
    }

    /// Scale every sample by `gain`
    pub fn scaled(mut self, gain: f64) -> Self {
        for sample in self.amplitude.iter_mut() {
            *sample *= gain;
        }
        self
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Check if the wavelet has no samples
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Earliest sample time
    pub fn start_time(&self) -> f64 {
        self.time.first().copied().unwrap_or(0.0)
    }
}
