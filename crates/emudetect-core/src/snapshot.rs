// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Device values captured outside the native layer.
//!
//! Build fields, telephony state, permissions and the package manager are
//! only reachable from the Android framework. The host application captures
//! them into a [`DeviceSnapshot`] and hands it over as JSON; the same shape
//! can be exported from a device for offline evaluation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::BuildAttributes;
use crate::error::ProbeError;
use crate::probe::{
    AttributeSource, BuildAttribute, PackageProbe, Permission, PermissionProbe, SystemProperties,
    TelephonyProbe,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelephonySnapshot {
    /// `PackageManager.FEATURE_TELEPHONY`
    pub supported: bool,
    pub line1_number: Option<String>,
    pub device_id: Option<String>,
    pub subscriber_id: Option<String>,
    pub network_operator_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSnapshot {
    pub attributes: BuildAttributes,
    pub telephony: TelephonySnapshot,
    pub granted_permissions: Vec<Permission>,
    /// Packages whose launch intent resolves to at least one activity.
    pub launchable_packages: Vec<String>,
    /// Recorded system properties. `None` defers to the live property area.
    pub properties: Option<BTreeMap<String, String>>,
}

impl DeviceSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl AttributeSource for DeviceSnapshot {
    fn attribute(&self, attribute: BuildAttribute) -> Option<String> {
        self.attributes.attribute(attribute)
    }
}

impl SystemProperties for DeviceSnapshot {
    /// Empty recorded values read as unset, as they do on a live device.
    fn system_property(&self, name: &str) -> Result<Option<String>, ProbeError> {
        Ok(self
            .properties
            .as_ref()
            .and_then(|properties| properties.get(name))
            .filter(|value| !value.is_empty())
            .cloned())
    }
}

impl TelephonyProbe for DeviceSnapshot {
    fn supports_telephony(&self) -> bool {
        self.telephony.supported
    }

    fn line1_number(&self) -> Result<Option<String>, ProbeError> {
        Ok(self.telephony.line1_number.clone())
    }

    fn device_id(&self) -> Result<Option<String>, ProbeError> {
        Ok(self.telephony.device_id.clone())
    }

    fn subscriber_id(&self) -> Result<Option<String>, ProbeError> {
        Ok(self.telephony.subscriber_id.clone())
    }

    fn network_operator_name(&self) -> Result<Option<String>, ProbeError> {
        Ok(self.telephony.network_operator_name.clone())
    }
}

impl PackageProbe for DeviceSnapshot {
    fn has_launchable_activity(&self, package: &str) -> Result<bool, ProbeError> {
        Ok(self.launchable_packages.iter().any(|p| p == package))
    }
}

impl PermissionProbe for DeviceSnapshot {
    fn is_granted(&self, permission: Permission) -> bool {
        self.granted_permissions.contains(&permission)
    }
}
