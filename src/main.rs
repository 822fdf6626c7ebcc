//! Synthseis CLI
//!
//! Command-line interface for the synthetic seismogram pipeline.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use synthseis::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Synthseis v{}", env!("CARGO_PKG_VERSION"));

    let (name, result) = handle_command(cli.command);
    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            for suggestion in err.recovery_suggestions() {
                warn!("{}", suggestion);
            }
            Err(err).with_context(|| format!("{} failed", name))
        }
    }
}

fn handle_command(cmd: Commands) -> (&'static str, synthseis::Result<String>) {
    match cmd {
        Commands::Logs {
            model,
            synthesis,
            format,
        } => ("logs", commands::logs(&model, &synthesis, format)),
        Commands::TimeDepth {
            model,
            synthesis,
            format,
        } => ("time-depth", commands::time_depth(&model, &synthesis, format)),
        Commands::Wavelet { synthesis, format } => {
            ("wavelet", commands::wavelet(&synthesis, format))
        }
        Commands::Synthesize {
            model,
            synthesis,
            noise,
            noise_width,
            seed,
            format,
        } => (
            "synthesize",
            commands::synthesize(&model, &synthesis, noise, noise_width, seed, format),
        ),
    }
}
