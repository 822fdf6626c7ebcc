//! Synthseis - 1-D Synthetic Seismograms
//!
//! Models the normal-incidence seismic response of a horizontally layered
//! earth. Each layer is described by its top depth, density and P-wave
//! velocity.
//!
//! # Pipeline
//!
//! - [`physics`]: acoustic impedance, reflection coefficients (with optional
//!   transmission loss) and depth to two-way time conversion
//! - [`wavelet`]: Ricker, Ormsby and Klauder source wavelets
//! - [`signal`]: time grids, convolution and the noise overlay
//! - [`synth`]: places reflectivity spikes on a time grid and convolves them
//!   with the wavelet
//! - [`model`]: validated layered models and blocky property logs

pub mod cli;
pub mod error;
pub mod model;
pub mod physics;
pub mod signal;
pub mod synth;
pub mod wavelet;

pub use error::{Result, SeismicError};
pub use model::{plot_log, LayeredModel, PropertyLogs};
pub use physics::{impedance, reflectivity, time_depth, ReflectivitySeries, TimeDepthMap};
pub use synth::{synthesize, synthesize_arrays, Scenario, Seismogram, SynthesisParams};
pub use wavelet::{wavelet, Wavelet, WaveletKind};
