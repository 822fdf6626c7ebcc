//! CLI Command Implementations
//!
//! Each command resolves its inputs, runs one pipeline stage and returns the
//! rendered output for `main` to print.

use log::info;
use serde::Serialize;

use super::{ModelArgs, OutputFormat, SynthesisArgs};
use crate::error::Result;
use crate::model::LayeredModel;
use crate::signal::noise_rng;
use crate::synth::{synthesize as synthesize_model, Scenario};
use crate::wavelet::Wavelet;

/// Build the scenario described by the model and synthesis arguments.
///
/// Starts from the scenario file (or the demo defaults); inline property
/// lists replace the matching model property and flags replace parameters.
pub fn resolve_scenario(model: &ModelArgs, synthesis: &SynthesisArgs) -> Result<Scenario> {
    let mut scenario = match &model.scenario {
        Some(path) => {
            info!("Loading scenario: {}", path.display());
            Scenario::from_json_file(path)?
        }
        None => Scenario::default(),
    };

    if model.depths.is_some() || model.densities.is_some() || model.velocities.is_some() {
        let base = &scenario.model;
        scenario.model = LayeredModel::new(
            model.depths.clone().unwrap_or_else(|| base.depths().to_vec()),
            model
                .densities
                .clone()
                .unwrap_or_else(|| base.densities().to_vec()),
            model
                .velocities
                .clone()
                .unwrap_or_else(|| base.velocities().to_vec()),
        )?;
    }

    let params = &mut scenario.params;
    if let Some(kind) = synthesis.wavelet {
        if kind != params.wavelet {
            params.frequencies = kind.default_frequencies();
        }
        params.wavelet = kind;
    }
    if let Some(frequencies) = &synthesis.frequencies {
        params.frequencies = frequencies.clone();
    }
    if let Some(amplitude) = synthesis.amplitude {
        params.amplitude = amplitude;
    }
    if synthesis.no_transmission_loss {
        params.use_transmission_loss = false;
    }
    if let Some(dt) = synthesis.dt {
        params.dt = dt;
    }
    if let Some(dmax) = synthesis.dmax {
        params.dmax = dmax;
    }
    if let Some(sweep_length) = synthesis.sweep_length {
        params.sweep_length = sweep_length;
    }

    Ok(scenario)
}

/// Property logs of the model
pub fn logs(model: &ModelArgs, synthesis: &SynthesisArgs, format: OutputFormat) -> Result<String> {
    let scenario = resolve_scenario(model, synthesis)?;
    info!(
        "Computing property logs for {} layers",
        scenario.model.num_layers()
    );

    let logs = scenario
        .model
        .property_logs(scenario.params.dmax, scenario.params.use_transmission_loss)?;

    match format {
        OutputFormat::Json => to_json(&logs),
        OutputFormat::Csv => Ok(to_csv(
            &["depth", "density", "velocity", "impedance"],
            &[&logs.depth, &logs.density, &logs.velocity, &logs.impedance],
        )),
    }
}

/// Depth to two-way time table of the model
pub fn time_depth(
    model: &ModelArgs,
    synthesis: &SynthesisArgs,
    format: OutputFormat,
) -> Result<String> {
    let scenario = resolve_scenario(model, synthesis)?;
    info!(
        "Converting {} layer tops to two-way time (dmax = {} m)",
        scenario.model.num_layers(),
        scenario.params.dmax
    );

    let map = scenario.model.time_depth(scenario.params.dmax)?;

    match format {
        OutputFormat::Json => to_json(&map),
        OutputFormat::Csv => Ok(to_csv(&["depth", "time"], &[&map.depth, &map.time])),
    }
}

/// Sampled source wavelet
pub fn wavelet(synthesis: &SynthesisArgs, format: OutputFormat) -> Result<String> {
    let scenario = resolve_scenario(&ModelArgs::default(), synthesis)?;
    let params = &scenario.params;
    params.validate()?;
    info!(
        "Generating {} wavelet at {:?} Hz",
        params.wavelet, params.frequencies
    );

    let wav = Wavelet::generate(
        params.wavelet,
        &params.frequencies,
        params.dt,
        params.sweep_length,
    )?
    .scaled(params.amplitude);

    match format {
        OutputFormat::Json => to_json(&wav),
        OutputFormat::Csv => Ok(to_csv(&["time", "amplitude"], &[&wav.time, &wav.amplitude])),
    }
}

/// Seismogram of the model, optionally with the noise overlay
pub fn synthesize(
    model: &ModelArgs,
    synthesis: &SynthesisArgs,
    noise: f64,
    noise_width: usize,
    seed: u64,
    format: OutputFormat,
) -> Result<String> {
    let scenario = resolve_scenario(model, synthesis)?;
    info!(
        "Synthesizing {} wavelet trace for {} layers",
        scenario.params.wavelet,
        scenario.model.num_layers()
    );

    let mut seismogram = synthesize_model(&scenario.model, &scenario.params)?;
    // Zero means no overlay; anything else goes through the level check
    if noise != 0.0 {
        info!("Adding noise at {:.1}% of peak (seed {})", noise * 100.0, seed);
        seismogram = seismogram.with_noise(noise, noise_width, &mut noise_rng(seed))?;
    }

    match format {
        OutputFormat::Json => to_json(&seismogram),
        OutputFormat::Csv => Ok(to_csv(
            &["time", "amplitude"],
            &[&seismogram.time, &seismogram.amplitude],
        )),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render parallel columns as CSV, truncated to the shortest column
fn to_csv(headers: &[&str], columns: &[&[f64]]) -> String {
    let rows = columns.iter().map(|c| c.len()).min().unwrap_or(0);
    let mut out = headers.join(",");
    out.push('\n');

    for row in 0..rows {
        let line: Vec<String> = columns.iter().map(|c| c[row].to_string()).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::SynthesisParams;
    use crate::wavelet::WaveletKind;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test]
    fn test_resolve_defaults_to_demo() {
        let scenario = resolve_scenario(&ModelArgs::default(), &SynthesisArgs::default()).unwrap();
        assert_eq!(scenario.model, LayeredModel::demo());
        assert_eq!(scenario.params, SynthesisParams::default());
    }

    #[test]
    fn test_resolve_partial_model_override() {
        let model = ModelArgs {
            depths: Some(vec![0.0, 40.0, 90.0]),
            ..ModelArgs::default()
        };
        let scenario = resolve_scenario(&model, &SynthesisArgs::default()).unwrap();
        assert_eq!(scenario.model.depths(), &[0.0, 40.0, 90.0]);
        assert_eq!(scenario.model.velocities(), LayeredModel::demo().velocities());
    }

    #[test]
    fn test_resolve_wavelet_switch_uses_kind_defaults() {
        let synthesis = SynthesisArgs {
            wavelet: Some(WaveletKind::Klauder),
            no_transmission_loss: true,
            ..SynthesisArgs::default()
        };
        let scenario = resolve_scenario(&ModelArgs::default(), &synthesis).unwrap();
        assert_eq!(scenario.params.frequencies, vec![10.0, 40.0]);
        assert!(!scenario.params.use_transmission_loss);
    }

    #[test]
    fn test_resolve_scenario_file() {
        let scenario = Scenario::new(
            LayeredModel::new(vec![0.0, 30.0], vec![2000.0, 2400.0], vec![1000.0, 2000.0])
                .unwrap(),
            SynthesisParams::default().with_dmax(120.0),
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(scenario.to_json().unwrap().as_bytes())
            .unwrap();

        let model = ModelArgs {
            scenario: Some(file.path().to_path_buf()),
            ..ModelArgs::default()
        };
        let resolved = resolve_scenario(&model, &SynthesisArgs::default()).unwrap();
        assert_eq!(resolved, scenario);
    }

    #[test]
    fn test_resolve_rejects_bad_inline_model() {
        let model = ModelArgs {
            depths: Some(vec![0.0, 40.0]),
            ..ModelArgs::default()
        };
        let err = resolve_scenario(&model, &SynthesisArgs::default()).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_time_depth_csv() {
        let out = time_depth(
            &ModelArgs::default(),
            &SynthesisArgs::default(),
            OutputFormat::Csv,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "depth,time");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("0,0"));
    }

    #[test]
    fn test_logs_json() {
        let out = logs(
            &ModelArgs::default(),
            &SynthesisArgs::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["depth"].as_array().unwrap().len(), 6);
        assert_eq!(value["reflectivity"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_wavelet_csv() {
        let synthesis = SynthesisArgs {
            dt: Some(0.001),
            ..SynthesisArgs::default()
        };
        let out = wavelet(&synthesis, OutputFormat::Csv).unwrap();
        assert!(out.starts_with("time,amplitude\n"));
        assert!(out.lines().count() > 80);
    }

    #[test]
    fn test_synthesize_json_with_noise() {
        let out = synthesize(
            &ModelArgs::default(),
            &SynthesisArgs::default(),
            0.02,
            21,
            9,
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["time"].as_array().unwrap().len(),
            value["amplitude"].as_array().unwrap().len()
        );
        assert_eq!(value["interface_times"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_synthesize_propagates_errors() {
        let synthesis = SynthesisArgs {
            frequencies: Some(vec![10.0, 20.0]),
            ..SynthesisArgs::default()
        };
        let err = synthesize(
            &ModelArgs::default(),
            &synthesis,
            0.0,
            15,
            0,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER_COUNT");
    }

    #[test_case(-0.5 ; "negative level")]
    #[test_case(f64::NAN ; "nan level")]
    #[test_case(f64::INFINITY ; "infinite level")]
    fn test_synthesize_rejects_bad_noise_level(noise: f64) {
        let err = synthesize(
            &ModelArgs::default(),
            &SynthesisArgs::default(),
            noise,
            15,
            0,
            OutputFormat::Json,
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NOISE_LEVEL");
    }

    #[test]
    fn test_to_csv_truncates_to_shortest() {
        let out = to_csv(&["a", "b"], &[&[1.0, 2.0, 3.0], &[0.5, 1.5]]);
        assert_eq!(out, "a,b\n1,0.5\n2,1.5\n");
    }
}
