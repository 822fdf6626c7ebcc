//! Signal utilities
//!
//! Uniform sampling grids, full linear convolution, and the illustrative
//! noise overlay applied to finished traces.

mod convolution;
mod grid;
mod noise;

pub use convolution::{convolve, triangular_filter};
pub use grid::{arange, bounded_arange, nearest_index, MAX_GRID_SAMPLES};
pub use noise::{add_noise, noise_rng, NOISE_FILTER_WIDTH, NOISE_FILTER_WIDTH_WIDE};
