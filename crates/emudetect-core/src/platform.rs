// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! The set of probes a detector runs against.

use std::sync::Arc;
use std::time::Duration;

use crate::host::{AndroidPropertyProbe, HostCommandProbe, HostFileProbe};
use crate::probe::{
    AttributeSource, CommandProbe, FileProbe, PackageProbe, PermissionProbe, SystemProperties,
    TelephonyProbe,
};
use crate::snapshot::DeviceSnapshot;

/// One implementation of every probe.
///
/// Probes are shared behind `Arc`, so a platform is cheap to clone and can
/// move onto a worker thread.
#[derive(Clone)]
pub struct Platform {
    pub(crate) attributes: Arc<dyn AttributeSource>,
    pub(crate) properties: Arc<dyn SystemProperties>,
    pub(crate) files: Arc<dyn FileProbe>,
    pub(crate) commands: Arc<dyn CommandProbe>,
    pub(crate) telephony: Arc<dyn TelephonyProbe>,
    pub(crate) packages: Arc<dyn PackageProbe>,
    pub(crate) permissions: Arc<dyn PermissionProbe>,
}

impl Platform {
    pub fn new(
        attributes: Arc<dyn AttributeSource>,
        properties: Arc<dyn SystemProperties>,
        files: Arc<dyn FileProbe>,
        commands: Arc<dyn CommandProbe>,
        telephony: Arc<dyn TelephonyProbe>,
        packages: Arc<dyn PackageProbe>,
        permissions: Arc<dyn PermissionProbe>,
    ) -> Self {
        Self {
            attributes,
            properties,
            files,
            commands,
            telephony,
            packages,
            permissions,
        }
    }

    /// Uses one object for every probe.
    pub fn uniform<D>(device: Arc<D>) -> Self
    where
        D: AttributeSource
            + SystemProperties
            + FileProbe
            + CommandProbe
            + TelephonyProbe
            + PackageProbe
            + PermissionProbe
            + 'static,
    {
        Self {
            attributes: device.clone(),
            properties: device.clone(),
            files: device.clone(),
            commands: device.clone(),
            telephony: device.clone(),
            packages: device.clone(),
            permissions: device,
        }
    }

    /// Combines values captured by the host application with probes of the
    /// running system.
    ///
    /// Files and the interface listing always come from this process. System
    /// properties come from the snapshot when it carries any, otherwise from
    /// bionic.
    pub fn from_snapshot(snapshot: DeviceSnapshot, command_timeout: Option<Duration>) -> Self {
        let has_properties = snapshot.properties.is_some();
        let snapshot = Arc::new(snapshot);
        let properties = if has_properties {
            snapshot.clone() as Arc<dyn SystemProperties>
        } else {
            Arc::new(AndroidPropertyProbe) as Arc<dyn SystemProperties>
        };

        Self {
            attributes: snapshot.clone(),
            properties,
            files: Arc::new(HostFileProbe),
            commands: Arc::new(HostCommandProbe::new(command_timeout)),
            telephony: snapshot.clone(),
            packages: snapshot.clone(),
            permissions: snapshot,
        }
    }

    pub fn with_files(mut self, files: Arc<dyn FileProbe>) -> Self {
        self.files = files;
        self
    }

    pub fn with_commands(mut self, commands: Arc<dyn CommandProbe>) -> Self {
        self.commands = commands;
        self
    }

    pub fn with_properties(mut self, properties: Arc<dyn SystemProperties>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_telephony(mut self, telephony: Arc<dyn TelephonyProbe>) -> Self {
        self.telephony = telephony;
        self
    }

    pub fn with_packages(mut self, packages: Arc<dyn PackageProbe>) -> Self {
        self.packages = packages;
        self
    }
}
