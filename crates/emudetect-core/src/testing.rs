// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! In-memory device used by unit tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::attributes::BuildAttributes;
use crate::error::ProbeError;
use crate::platform::Platform;
use crate::probe::{
    AttributeSource, BuildAttribute, CommandProbe, FileProbe, PackageProbe, Permission,
    PermissionProbe, ProbeCommand, SystemProperties, TelephonyProbe,
};

#[derive(Debug, Clone, Default)]
pub struct FakeFile {
    readable: bool,
    contents: Vec<u8>,
}

/// Every probe answered from plain fields, with call counters for the
/// probes whose invocation matters.
#[derive(Debug, Default)]
pub struct FakeDevice {
    pub attributes: BuildAttributes,
    pub properties: HashMap<String, String>,
    pub files: HashMap<PathBuf, FakeFile>,
    pub netcfg_output: Option<String>,
    pub telephony_supported: bool,
    pub line1_number: Option<String>,
    pub device_id: Option<String>,
    pub subscriber_id: Option<String>,
    pub operator_name: Option<String>,
    pub launchable: HashSet<String>,
    pub granted: HashSet<Permission>,
    pub telephony_calls: AtomicUsize,
    pub package_calls: AtomicUsize,
    pub command_calls: AtomicUsize,
}

impl FakeDevice {
    pub fn with_attributes(mut self, attributes: BuildAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.files.insert(
            PathBuf::from(path),
            FakeFile {
                readable: true,
                contents: contents.to_vec(),
            },
        );
        self
    }

    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.files.insert(PathBuf::from(path), FakeFile::default());
        self
    }

    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.properties.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_netcfg(mut self, output: &str) -> Self {
        self.netcfg_output = Some(output.to_string());
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.granted.insert(permission);
        self
    }

    pub fn with_telephony(mut self) -> Self {
        self.telephony_supported = true;
        self
    }

    pub fn with_launchable(mut self, package: &str) -> Self {
        self.launchable.insert(package.to_string());
        self
    }

    pub fn telephony_calls(&self) -> usize {
        self.telephony_calls.load(Ordering::SeqCst)
    }

    pub fn package_calls(&self) -> usize {
        self.package_calls.load(Ordering::SeqCst)
    }

    pub fn command_calls(&self) -> usize {
        self.command_calls.load(Ordering::SeqCst)
    }

    pub fn into_platform(self) -> (Arc<Self>, Platform) {
        let device = Arc::new(self);
        let platform = Platform::uniform(device.clone());
        (device, platform)
    }

    fn telephony_value(&self, value: &Option<String>) -> Result<Option<String>, ProbeError> {
        self.telephony_calls.fetch_add(1, Ordering::SeqCst);
        Ok(value.clone())
    }
}

impl AttributeSource for FakeDevice {
    fn attribute(&self, attribute: BuildAttribute) -> Option<String> {
        self.attributes.attribute(attribute)
    }
}

impl SystemProperties for FakeDevice {
    fn system_property(&self, name: &str) -> Result<Option<String>, ProbeError> {
        Ok(self.properties.get(name).cloned())
    }
}

impl FileProbe for FakeDevice {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_readable(&self, path: &Path) -> bool {
        self.files.get(path).is_some_and(|file| file.readable)
    }

    fn read_head(&self, path: &Path, limit: usize) -> Result<Vec<u8>, ProbeError> {
        match self.files.get(path) {
            Some(file) if file.readable => {
                Ok(file.contents.iter().take(limit).copied().collect())
            }
            _ => Err(ProbeError::Unavailable(path.display().to_string())),
        }
    }
}

impl CommandProbe for FakeDevice {
    fn run(&self, command: &ProbeCommand) -> Result<String, ProbeError> {
        self.command_calls.fetch_add(1, Ordering::SeqCst);
        self.netcfg_output
            .clone()
            .ok_or_else(|| ProbeError::Unavailable(command.to_string()))
    }
}

impl TelephonyProbe for FakeDevice {
    fn supports_telephony(&self) -> bool {
        self.telephony_calls.fetch_add(1, Ordering::SeqCst);
        self.telephony_supported
    }

    fn line1_number(&self) -> Result<Option<String>, ProbeError> {
        self.telephony_value(&self.line1_number)
    }

    fn device_id(&self) -> Result<Option<String>, ProbeError> {
        self.telephony_value(&self.device_id)
    }

    fn subscriber_id(&self) -> Result<Option<String>, ProbeError> {
        self.telephony_value(&self.subscriber_id)
    }

    fn network_operator_name(&self) -> Result<Option<String>, ProbeError> {
        self.telephony_value(&self.operator_name)
    }
}

impl PackageProbe for FakeDevice {
    fn has_launchable_activity(&self, package: &str) -> Result<bool, ProbeError> {
        self.package_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.launchable.contains(package))
    }
}

impl PermissionProbe for FakeDevice {
    fn is_granted(&self, permission: Permission) -> bool {
        self.granted.contains(&permission)
    }
}
