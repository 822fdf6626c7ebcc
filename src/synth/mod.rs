//! Seismogram Synthesizer
//!
//! Orchestrates the physics stages and the wavelet library into a
//! time-domain trace.

mod params;
mod seismogram;

pub use params::{Scenario, SynthesisParams, DEFAULT_DMAX, DEFAULT_DT, DEFAULT_FREQUENCY};
pub use seismogram::{spike_series, synthesize, synthesize_arrays, Seismogram};
