//! Seismogram synthesis
//!
//! Pipeline: time-depth conversion and reflectivity -> reflectivity spikes on
//! a uniform time grid -> full convolution with the source wavelet -> trim to
//! the modelled time window.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::params::SynthesisParams;
use crate::error::Result;
use crate::model::LayeredModel;
use crate::signal::{add_noise, bounded_arange, convolve, nearest_index};
use crate::wavelet::Wavelet;

/// A synthetic trace with the intermediate series used to build it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seismogram {
    /// Trace sample times (s), within `[0, max grid time]`
    pub time: Vec<f64>,
    /// Trace amplitude at each sample time
    pub amplitude: Vec<f64>,
    /// Source wavelet after amplitude scaling
    pub wavelet: Wavelet,
    /// Two-way time of each interface (s)
    pub interface_times: Vec<f64>,
    /// Reflectivity placed at each interface time
    pub reflectivity: Vec<f64>,
}

impl Seismogram {
    /// Number of trace samples
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Check if the trace has no samples
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Largest absolute amplitude of the trace
    pub fn peak_amplitude(&self) -> f64 {
        self.amplitude
            .iter()
            .fold(0.0_f64, |acc, &s| acc.max(s.abs()))
    }

    /// Copy of this seismogram with the illustrative noise overlay applied
    pub fn with_noise<R: Rng + ?Sized>(
        &self,
        level: f64,
        filter_width: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let amplitude = add_noise(&self.amplitude, level, filter_width, rng)?;
        Ok(Self {
            amplitude,
            ..self.clone()
        })
    }
}

/// Place each value at the grid sample nearest its time.
///
/// Ties go to the lowest index. If two interfaces land on the same sample,
/// the deeper one wins.
pub fn spike_series(grid: &[f64], times: &[f64], values: &[f64]) -> Vec<f64> {
    let mut series = vec![0.0; grid.len()];
    let mut occupied = vec![false; grid.len()];

    for (&t, &value) in times.iter().zip(values.iter()) {
        if let Some(index) = nearest_index(grid, t) {
            if occupied[index] {
                warn!(
                    "Interfaces share grid sample {} (t = {:.6}s); keeping the deeper reflection",
                    index, grid[index]
                );
            }
            series[index] = value;
            occupied[index] = true;
        }
    }

    series
}

/// Synthesize the seismogram of a layered model
///
/// # Errors
/// Any validation error from the parameters, the time-depth conversion, the
/// reflectivity stage or the wavelet generator. Nothing is returned on
/// failure.
pub fn synthesize(model: &LayeredModel, params: &SynthesisParams) -> Result<Seismogram> {
    params.validate()?;

    let time_depth = model.time_depth(params.dmax)?;
    let reflectivity = model.reflectivity(params.use_transmission_loss)?.effective;
    let interface_times = time_depth.interface_times().to_vec();

    let grid = bounded_arange(time_depth.min_time(), time_depth.max_time(), params.dt)?;
    let wavelet = Wavelet::generate(
        params.wavelet,
        &params.frequencies,
        params.dt,
        params.sweep_length,
    )?
    .scaled(params.amplitude);

    debug!(
        "Synthesizing {} interfaces on {} samples with a {}-sample {} wavelet",
        interface_times.len(),
        grid.len(),
        wavelet.len(),
        params.wavelet
    );

    let spikes = spike_series(&grid, &interface_times, &reflectivity);
    let trace = convolve(&wavelet.amplitude, &spikes);

    let t_start = wavelet.start_time();
    let t_end = grid.last().copied().unwrap_or(0.0);
    let (time, amplitude): (Vec<f64>, Vec<f64>) = trace
        .into_iter()
        .enumerate()
        .map(|(i, a)| (t_start + params.dt * i as f64, a))
        .filter(|&(t, _)| t >= 0.0 && t <= t_end)
        .unzip();

    debug!("Trimmed trace to {} samples", time.len());

    Ok(Seismogram {
        time,
        amplitude,
        wavelet,
        interface_times,
        reflectivity,
    })
}

/// Synthesize directly from parallel depth, density and velocity arrays
pub fn synthesize_arrays(
    depth: &[f64],
    density: &[f64],
    velocity: &[f64],
    params: &SynthesisParams,
) -> Result<Seismogram> {
    let model = LayeredModel::new(depth.to_vec(), density.to_vec(), velocity.to_vec())?;
    synthesize(&model, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeismicError;
    use crate::signal::noise_rng;
    use crate::wavelet::WaveletKind;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_spike_series_placement() {
        let grid = [0.0, 0.1, 0.2, 0.3, 0.4];
        let spikes = spike_series(&grid, &[0.11, 0.32], &[0.5, -0.25]);
        assert_eq!(spikes, vec![0.0, 0.5, 0.0, -0.25, 0.0]);
    }

    #[test]
    fn test_spike_series_collision_keeps_last() {
        let grid = [0.0, 0.1, 0.2];
        let spikes = spike_series(&grid, &[0.09, 0.11], &[0.5, 0.7]);
        assert_eq!(spikes, vec![0.0, 0.7, 0.0]);
    }

    #[test]
    fn test_trace_window() {
        let seis = synthesize(&LayeredModel::demo(), &SynthesisParams::default()).unwrap();

        assert_eq!(seis.time.len(), seis.amplitude.len());
        assert!(seis.time[0] >= 0.0);
        assert!(seis.time[0] < 0.0001 + 1e-12);
        let last = *seis.time.last().unwrap();
        assert!(last <= 0.3 + 200.0 / 1500.0);
        assert!(seis.time.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_reports_inputs() {
        let params = SynthesisParams::default().with_transmission_loss(false);
        let seis = synthesize(&LayeredModel::demo(), &params).unwrap();

        assert_eq!(seis.interface_times.len(), 2);
        assert_relative_eq!(seis.interface_times[0], 0.2, epsilon = 1e-12);
        assert_eq!(
            seis.reflectivity,
            LayeredModel::demo().reflectivity(false).unwrap().raw
        );
        assert_relative_eq!(seis.wavelet.start_time(), -0.04);
    }

    #[test]
    fn test_amplitude_scales_trace() {
        let base = synthesize(&LayeredModel::demo(), &SynthesisParams::default()).unwrap();
        let doubled = synthesize(
            &LayeredModel::demo(),
            &SynthesisParams::default().with_amplitude(2.0),
        )
        .unwrap();

        assert_eq!(base.len(), doubled.len());
        for (a, b) in base.amplitude.iter().zip(&doubled.amplitude) {
            assert_relative_eq!(2.0 * a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_single_layer_is_silent() {
        let model = LayeredModel::new(vec![0.0], vec![2000.0], vec![1500.0]).unwrap();
        let seis = synthesize(&model, &SynthesisParams::default()).unwrap();
        assert!(!seis.is_empty());
        assert_eq!(seis.peak_amplitude(), 0.0);
    }

    #[test]
    fn test_failure_returns_no_trace() {
        let params = SynthesisParams::default().with_dmax(50.0);
        let err = synthesize(&LayeredModel::demo(), &params).unwrap_err();
        assert!(matches!(err, SeismicError::InvalidDepthRange { .. }));

        let params = SynthesisParams::new(WaveletKind::Ricker, vec![20.0, 40.0]);
        let err = synthesize(&LayeredModel::demo(), &params).unwrap_err();
        assert!(matches!(err, SeismicError::InvalidParameterCount { .. }));
    }

    #[test]
    fn test_oversized_grids_are_rejected() {
        let params = SynthesisParams::default().with_dt(1e-12);
        let err = synthesize(&LayeredModel::demo(), &params).unwrap_err();
        assert!(matches!(err, SeismicError::TooManySamples { .. }));

        let params = SynthesisParams::default().with_dmax(1e9);
        let err = synthesize(&LayeredModel::demo(), &params).unwrap_err();
        assert!(matches!(err, SeismicError::TooManySamples { .. }));
    }

    #[test]
    fn test_synthesize_arrays_matches_model() {
        let params = SynthesisParams::default();
        let model = LayeredModel::demo();
        let from_arrays = synthesize_arrays(
            model.depths(),
            model.densities(),
            model.velocities(),
            &params,
        )
        .unwrap();
        assert_eq!(from_arrays, synthesize(&model, &params).unwrap());
    }

    #[test]
    fn test_with_noise_keeps_axes() {
        let seis = synthesize(&LayeredModel::demo(), &SynthesisParams::default()).unwrap();
        let noisy = seis.with_noise(0.02, 15, &mut noise_rng(3)).unwrap();

        assert_eq!(noisy.time, seis.time);
        assert_eq!(noisy.wavelet, seis.wavelet);
        assert_ne!(noisy.amplitude, seis.amplitude);
    }
}
