//! CLI Module
//!
//! Command-line interface for the Synthseis modelling pipeline.
//! Commands print their results as JSON or CSV; plotting is left to the caller.

pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::wavelet::WaveletKind;

/// Synthseis - 1-D synthetic seismograms from layered earth models
#[derive(Parser, Debug)]
#[command(name = "synthseis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output encoding for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Where the layered model comes from
///
/// A scenario file wins over inline lists; with neither, the demo model is used.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Scenario JSON file holding a model and synthesis parameters
    #[arg(short, long)]
    pub scenario: Option<PathBuf>,

    /// Layer top depths in metres, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub depths: Option<Vec<f64>>,

    /// Layer densities in kg/m^3, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub densities: Option<Vec<f64>>,

    /// Layer velocities in m/s, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub velocities: Option<Vec<f64>>,
}

/// Synthesis overrides applied on top of the scenario (or the defaults)
#[derive(Args, Debug, Clone, Default)]
pub struct SynthesisArgs {
    /// Wavelet type
    #[arg(short, long, value_enum)]
    pub wavelet: Option<WaveletKind>,

    /// Wavelet frequencies in Hz, comma separated (1 Ricker, 4 Ormsby, 2 Klauder)
    #[arg(short, long, value_delimiter = ',')]
    pub frequencies: Option<Vec<f64>>,

    /// Wavelet amplitude
    #[arg(short, long, allow_hyphen_values = true)]
    pub amplitude: Option<f64>,

    /// Ignore transmission loss through shallower interfaces
    #[arg(long)]
    pub no_transmission_loss: bool,

    /// Sample interval in seconds
    #[arg(long)]
    pub dt: Option<f64>,

    /// Depth of the half-space floor in metres
    #[arg(long)]
    pub dmax: Option<f64>,

    /// Klauder sweep length in seconds
    #[arg(long)]
    pub sweep_length: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Density, velocity, impedance and reflectivity logs against depth
    #[command(name = "logs")]
    Logs {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        synthesis: SynthesisArgs,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Two-way travel time to each layer top
    #[command(name = "time-depth")]
    TimeDepth {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        synthesis: SynthesisArgs,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Sample a source wavelet over its support
    #[command(name = "wavelet")]
    Wavelet {
        #[command(flatten)]
        synthesis: SynthesisArgs,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Synthesize the seismogram of a layered model
    #[command(name = "synthesize")]
    Synthesize {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        synthesis: SynthesisArgs,

        /// Noise level as a fraction of the peak amplitude (0 = off)
        #[arg(long, default_value_t = 0.0)]
        noise: f64,

        /// Width of the triangular noise smoothing filter
        #[arg(long, default_value_t = crate::signal::NOISE_FILTER_WIDTH)]
        noise_width: usize,

        /// Seed for the noise generator
        #[arg(long, default_value_t = 0)]
        seed: u64,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_synthesize() {
        let cli = Cli::parse_from([
            "synthseis",
            "synthesize",
            "--depths",
            "0,50,100",
            "--densities",
            "2000,2300,2500",
            "--velocities",
            "500,1000,1500",
            "--wavelet",
            "ormsby",
            "--frequencies",
            "5,10,40,50",
            "--noise",
            "0.02",
            "--format",
            "csv",
        ]);

        match cli.command {
            Commands::Synthesize {
                model,
                synthesis,
                noise,
                format,
                ..
            } => {
                assert_eq!(model.depths, Some(vec![0.0, 50.0, 100.0]));
                assert_eq!(synthesis.wavelet, Some(WaveletKind::Ormsby));
                assert_eq!(synthesis.frequencies, Some(vec![5.0, 10.0, 40.0, 50.0]));
                assert_eq!(noise, 0.02);
                assert_eq!(format, OutputFormat::Csv);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
