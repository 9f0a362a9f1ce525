// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Platform probe interfaces.
//!
//! Each trait is a narrow window onto the device. The checks only ever see
//! these traits, so any probe can be replaced by a recorded snapshot or a
//! test double.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ProbeError;
use crate::tables::{NETCFG_PROGRAM, NETCFG_WORKING_DIR};

/// Build attributes consulted by the attribute-pattern check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildAttribute {
    Fingerprint,
    Model,
    Manufacturer,
    Brand,
    Device,
    Hardware,
    Product,
    Board,
    Bootloader,
    Serial,
}

/// Runtime permissions that gate individual checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "android.permission.READ_PHONE_STATE")]
    ReadPhoneState,
    #[serde(rename = "android.permission.INTERNET")]
    Internet,
}

impl Permission {
    /// Fully qualified Android permission name.
    pub fn android_name(self) -> &'static str {
        match self {
            Self::ReadPhoneState => "android.permission.READ_PHONE_STATE",
            Self::Internet => "android.permission.INTERNET",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.android_name())
    }
}

/// A subprocess invocation handed to a [`CommandProbe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl ProbeCommand {
    /// Interface listing used by the network-interface check.
    pub fn netcfg() -> Self {
        Self {
            program: NETCFG_PROGRAM.to_string(),
            args: Vec::new(),
            working_dir: Some(PathBuf::from(NETCFG_WORKING_DIR)),
        }
    }
}

impl fmt::Display for ProbeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Source of device build attributes.
#[cfg_attr(test, mockall::automock)]
pub trait AttributeSource: Send + Sync {
    /// Raw attribute value, `None` when the platform has none.
    fn attribute(&self, attribute: BuildAttribute) -> Option<String>;
}

/// System property lookup.
#[cfg_attr(test, mockall::automock)]
pub trait SystemProperties: Send + Sync {
    /// Current value of `name`, `Ok(None)` when unset.
    fn system_property(&self, name: &str) -> Result<Option<String>, ProbeError>;
}

/// Filesystem access.
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_readable(&self, path: &Path) -> bool;

    /// Reads at most `limit` bytes from the start of `path`.
    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, ProbeError>;
}

/// Subprocess execution.
#[cfg_attr(test, mockall::automock)]
pub trait CommandProbe: Send + Sync {
    /// Runs `command` and returns stdout followed by stderr.
    fn run(&self, command: &ProbeCommand) -> Result<String, ProbeError>;
}

/// Telephony service access.
#[cfg_attr(test, mockall::automock)]
pub trait TelephonyProbe: Send + Sync {
    /// Whether the device advertises the telephony feature at all.
    fn supports_telephony(&self) -> bool;

    fn line1_number(&self) -> Result<Option<String>, ProbeError>;

    fn device_id(&self) -> Result<Option<String>, ProbeError>;

    fn subscriber_id(&self) -> Result<Option<String>, ProbeError>;

    fn network_operator_name(&self) -> Result<Option<String>, ProbeError>;
}

/// Package manager access.
#[cfg_attr(test, mockall::automock)]
pub trait PackageProbe: Send + Sync {
    /// Whether `package` has a launch intent resolving to at least one activity.
    fn has_launchable_activity(&self, package: &str) -> Result<bool, ProbeError>;
}

/// Permission and capability checks.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionProbe: Send + Sync {
    fn is_granted(&self, permission: Permission) -> bool;
}
