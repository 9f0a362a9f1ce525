// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Configuration for the detector.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tables::DEFAULT_SUSPECT_PACKAGES;

/// Default bound on the interface-listing subprocess.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 5_000;

/// Behavioural switches for a detection run.
///
/// Built with chained setters, then handed to a
/// [`Detector`](crate::Detector), which owns it for the rest of its life.
///
/// ```
/// use emudetect::DetectorConfig;
///
/// let mut config = DetectorConfig::default();
/// config
///     .set_debug(true)
///     .set_check_telephony(true)
///     .add_suspect_package("com.example.emulator.helper");
/// assert_eq!(config.suspect_packages().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    verbose: bool,
    check_telephony: bool,
    check_package: bool,
    suspect_packages: Vec<String>,
    command_timeout_ms: Option<u64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            check_telephony: false,
            check_package: true,
            suspect_packages: DEFAULT_SUSPECT_PACKAGES
                .iter()
                .map(|package| package.to_string())
                .collect(),
            command_timeout_ms: Some(DEFAULT_COMMAND_TIMEOUT_MS),
        }
    }
}

impl DetectorConfig {
    /// Parses a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Loads a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Enables diagnostic logging of individual checks.
    pub fn set_debug(&mut self, verbose: bool) -> &mut Self {
        self.verbose = verbose;
        self
    }

    pub fn set_check_telephony(&mut self, enabled: bool) -> &mut Self {
        self.check_telephony = enabled;
        self
    }

    pub fn set_check_package(&mut self, enabled: bool) -> &mut Self {
        self.check_package = enabled;
        self
    }

    /// Appends a suspect package. Duplicates are kept.
    pub fn add_suspect_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.suspect_packages.push(package.into());
        self
    }

    pub fn add_suspect_packages<I, S>(&mut self, packages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suspect_packages
            .extend(packages.into_iter().map(Into::into));
        self
    }

    /// Bounds the interface-listing subprocess. `None` waits forever.
    pub fn set_command_timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.command_timeout_ms =
            timeout.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn is_debug(&self) -> bool {
        self.verbose
    }

    pub fn is_check_telephony(&self) -> bool {
        self.check_telephony
    }

    pub fn is_check_package(&self) -> bool {
        self.check_package
    }

    pub fn suspect_packages(&self) -> &[String] {
        &self.suspect_packages
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_ms.map(Duration::from_millis)
    }
}
