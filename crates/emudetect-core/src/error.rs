// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Error types for probes and configuration loading.
//!
//! Probe errors never escape a detection run. Checks turn them into an
//! absent signal; they exist so the failure is visible in verbose logs and
//! to callers driving a probe directly.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors a platform probe can report.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Reading a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A subprocess could not be started.
    #[error("failed to launch {command}: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A subprocess started but collecting its output failed.
    #[error("failed to collect output of {command}: {source}")]
    Output {
        /// Rendered command line.
        command: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A subprocess ran past its deadline and was killed.
    #[error("{command} did not finish within {timeout:?}")]
    Timeout {
        /// Rendered command line.
        command: String,
        /// Deadline that was exceeded.
        timeout: Duration,
    },

    /// The caller lacks a permission the probe needs.
    #[error("permission not granted: {0}")]
    PermissionDenied(String),

    /// The platform has no value to report.
    #[error("value unavailable: {0}")]
    Unavailable(String),

    /// A system property lookup failed.
    #[error("property lookup failed for {name}: {reason}")]
    Property {
        /// Property name.
        name: String,
        /// Reason for failure.
        reason: String,
    },
}

/// Errors raised while loading a detector configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The TOML document is malformed.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document is malformed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
