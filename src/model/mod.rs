//! Layered Earth Model
//!
//! The model is the single source entity of the pipeline. Everything else
//! (impedance, reflectivity, time-depth, logs, seismogram) is derived from
//! it on demand and never cached.

mod layered;
mod logs;

pub use layered::LayeredModel;
pub use logs::{plot_log, property_logs, PropertyLogs};
