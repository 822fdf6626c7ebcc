//! Error handling for Synthseis
//!
//! Every failure is a local validation error raised where it is detected.
//! A failed stage aborts the whole computation; no partial traces are returned.

use thiserror::Error;

use crate::wavelet::WaveletKind;

/// Result type alias for Synthseis operations
pub type Result<T> = std::result::Result<T, SeismicError>;

/// Main error type for Synthseis operations
#[derive(Error, Debug)]
pub enum SeismicError {
    // Model Errors
    #[error("Dimension mismatch: {name} has {found} entries, expected {expected}")]
    DimensionMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Layered model contains no layers")]
    EmptyModel,

    #[error("Layer depths must be strictly increasing: layer {index} is not below the layer above it")]
    UnsortedDepths { index: usize },

    #[error("Invalid velocity {value} m/s in layer {layer}")]
    InvalidVelocity { layer: usize, value: f64 },

    #[error("Maximum depth {dmax} m must exceed the deepest layer top at {deepest} m")]
    InvalidDepthRange { dmax: f64, deepest: f64 },

    #[error("Degenerate interface {interface}: impedances {upper} and {lower} sum to zero")]
    DegenerateInterface {
        interface: usize,
        upper: f64,
        lower: f64,
    },

    // Wavelet Errors
    #[error("{wavelet} wavelet needs {expected} frequencies, got {found}")]
    InvalidParameterCount {
        wavelet: WaveletKind,
        expected: usize,
        found: usize,
    },

    #[error("Invalid wavelet frequency: {reason}")]
    InvalidFrequency { reason: String },

    #[error("Invalid Klauder sweep length: {sweep_length} s")]
    InvalidSweepLength { sweep_length: f64 },

    #[error("Unknown wavelet type: {name}")]
    UnknownWavelet { name: String },

    // Sampling Errors
    #[error("Invalid sample interval: {dt} s")]
    InvalidSampleInterval { dt: f64 },

    #[error("Time grid would hold {requested} samples, above the limit of {limit}")]
    TooManySamples { requested: f64, limit: usize },

    #[error("Invalid noise level: {level}")]
    InvalidNoiseLevel { level: f64 },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SeismicError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SeismicError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            SeismicError::EmptyModel => "EMPTY_MODEL",
            SeismicError::UnsortedDepths { .. } => "UNSORTED_DEPTHS",
            SeismicError::InvalidVelocity { .. } => "INVALID_VELOCITY",
            SeismicError::InvalidDepthRange { .. } => "INVALID_DEPTH_RANGE",
            SeismicError::DegenerateInterface { .. } => "DEGENERATE_INTERFACE",
            SeismicError::InvalidParameterCount { .. } => "INVALID_PARAMETER_COUNT",
            SeismicError::InvalidFrequency { .. } => "INVALID_FREQUENCY",
            SeismicError::InvalidSweepLength { .. } => "INVALID_SWEEP_LENGTH",
            SeismicError::UnknownWavelet { .. } => "UNKNOWN_WAVELET",
            SeismicError::InvalidSampleInterval { .. } => "INVALID_SAMPLE_INTERVAL",
            SeismicError::TooManySamples { .. } => "TOO_MANY_SAMPLES",
            SeismicError::InvalidNoiseLevel { .. } => "INVALID_NOISE_LEVEL",
            SeismicError::Io(_) => "IO_ERROR",
            SeismicError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SeismicError::DimensionMismatch { .. } => vec![
                "Depths, densities and velocities need one entry per layer",
                "Check for a missing or extra value in one of the lists",
            ],
            SeismicError::EmptyModel => vec!["Provide at least one layer"],
            SeismicError::UnsortedDepths { .. } => vec![
                "List layer tops from shallowest to deepest",
                "Remove duplicated layer tops",
            ],
            SeismicError::InvalidVelocity { .. } => {
                vec!["Layer velocities must be finite and greater than zero"]
            }
            SeismicError::InvalidDepthRange { .. } => vec![
                "Increase the maximum depth below the deepest layer top",
                "The half-space needs a non-zero thickness to be timed",
            ],
            SeismicError::DegenerateInterface { .. } => vec![
                "Adjacent impedances of opposite sign cannot form an interface",
                "Check the sign of densities and velocities",
            ],
            SeismicError::InvalidParameterCount { .. } => vec![
                "Ricker takes 1 frequency",
                "Ormsby takes 4 frequencies",
                "Klauder takes 2 frequencies",
            ],
            SeismicError::InvalidFrequency { .. } => vec![
                "Frequencies must be finite and greater than zero",
                "Ormsby corner frequencies must be distinct",
            ],
            SeismicError::InvalidSweepLength { .. } => {
                vec!["Use a finite, positive sweep length (default 5 s)"]
            }
            SeismicError::UnknownWavelet { .. } => {
                vec!["Available wavelets: RICKER, ORMSBY, KLAUDER"]
            }
            SeismicError::InvalidSampleInterval { .. } => {
                vec!["Use a finite, positive sample interval (e.g. 0.0001 s)"]
            }
            SeismicError::TooManySamples { .. } => vec![
                "Use a coarser sample interval",
                "Reduce the maximum depth or raise the lowest wavelet frequency",
            ],
            SeismicError::InvalidNoiseLevel { .. } => {
                vec!["Noise level is a non-negative fraction of the peak amplitude"]
            }
            _ => vec![],
        }
    }
}
