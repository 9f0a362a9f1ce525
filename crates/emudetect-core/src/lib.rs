// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Emudetect - Android emulator detection
//!
//! Heuristic, best-effort detection of emulated Android devices. A
//! [`Detector`] runs an ordered set of independent signal checks against a
//! [`Platform`] of probes and stops at the first positive one.
//!
//! This is a deterrent against emulator farms, not a security boundary:
//! anyone who controls the probes' answers controls the verdict.
//!
//! ```
//! use emudetect::{BuildAttributes, DetectorConfig, Detector, DeviceSnapshot, Platform};
//!
//! let snapshot = DeviceSnapshot {
//!     attributes: BuildAttributes {
//!         fingerprint: "generic/sdk_gphone_x86/generic_x86:9".into(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! let mut config = DetectorConfig::default();
//! config.set_check_telephony(true);
//!
//! let detector = Detector::new(config, Platform::from_snapshot(snapshot, None));
//! assert!(detector.detect());
//! ```

/// Logs at debug level when the detector runs in verbose mode.
macro_rules! verbose {
    ($enabled:expr, $($arg:tt)+) => {
        if $enabled {
            tracing::debug!($($arg)+);
        }
    };
}

pub mod attributes;
pub mod checks;
pub mod config;
pub mod detector;
pub mod error;
pub mod host;
pub mod platform;
pub mod probe;
pub mod snapshot;
pub mod tables;
pub mod verdict;

#[cfg(test)]
mod testing;

pub use attributes::BuildAttributes;
pub use config::DetectorConfig;
pub use detector::Detector;
pub use error::{ConfigError, ProbeError};
pub use platform::Platform;
pub use probe::{
    AttributeSource, BuildAttribute, CommandProbe, FileProbe, PackageProbe, Permission,
    PermissionProbe, ProbeCommand, SystemProperties, TelephonyProbe,
};
pub use snapshot::{DeviceSnapshot, TelephonySnapshot};
pub use verdict::{EmulatorDetectionResult, Signal, Verdict};
