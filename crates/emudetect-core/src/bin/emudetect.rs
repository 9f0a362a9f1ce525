// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Offline emulator detection over an exported device snapshot.
//!
//! ```text
//! emudetect detect --snapshot device.json [--config emudetect.toml] [--verbose]
//! emudetect info --snapshot device.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use emudetect::{Detector, DetectorConfig, DeviceSnapshot, EmulatorDetectionResult, Platform};

#[derive(Parser)]
#[command(name = "emudetect", version, about = "Heuristic Android emulator detection")]
struct Cli {
    /// Log every check as it runs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run detection and print the verdict as JSON
    Detect {
        /// Device snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Detector configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the verdict
        #[arg(long)]
        pretty: bool,
    },
    /// Print the build attributes of a snapshot
    Info {
        /// Device snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,
    },
}

fn load_snapshot(path: &Path) -> Result<DeviceSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    DeviceSnapshot::from_json_str(&json)
        .with_context(|| format!("Invalid snapshot {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Detect {
            snapshot,
            config,
            pretty,
        } => {
            let mut detector_config = match config {
                Some(path) => DetectorConfig::load(&path)?,
                None => DetectorConfig::default(),
            };
            if cli.verbose {
                detector_config.set_debug(true);
            }

            let command_timeout = detector_config.command_timeout();
            let platform = Platform::from_snapshot(load_snapshot(&snapshot)?, command_timeout);
            let verdict = Detector::new(detector_config, platform).evaluate();
            info!(
                "Verdict for {}: emulator={}",
                snapshot.display(),
                verdict.is_emulator
            );

            let result = EmulatorDetectionResult::from(&verdict);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", json);
        }
        Commands::Info { snapshot } => {
            println!("{}", load_snapshot(&snapshot)?.attributes.device_info());
        }
    }

    Ok(())
}
