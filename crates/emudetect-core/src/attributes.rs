// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Device build attributes.

use serde::{Deserialize, Serialize};

use crate::probe::{AttributeSource, BuildAttribute};

/// Snapshot of the build attributes the attribute-pattern check reads.
///
/// Missing attributes are empty strings, which never match a marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildAttributes {
    pub fingerprint: String,
    pub model: String,
    pub manufacturer: String,
    pub brand: String,
    pub device: String,
    pub hardware: String,
    pub product: String,
    pub board: String,
    pub bootloader: String,
    pub serial: String,
}

impl BuildAttributes {
    /// Reads every attribute from `source`.
    pub fn from_source(source: &dyn AttributeSource) -> Self {
        let read = |attribute| source.attribute(attribute).unwrap_or_default();
        Self {
            fingerprint: read(BuildAttribute::Fingerprint),
            model: read(BuildAttribute::Model),
            manufacturer: read(BuildAttribute::Manufacturer),
            brand: read(BuildAttribute::Brand),
            device: read(BuildAttribute::Device),
            hardware: read(BuildAttribute::Hardware),
            product: read(BuildAttribute::Product),
            board: read(BuildAttribute::Board),
            bootloader: read(BuildAttribute::Bootloader),
            serial: read(BuildAttribute::Serial),
        }
    }

    pub fn get(&self, attribute: BuildAttribute) -> &str {
        match attribute {
            BuildAttribute::Fingerprint => &self.fingerprint,
            BuildAttribute::Model => &self.model,
            BuildAttribute::Manufacturer => &self.manufacturer,
            BuildAttribute::Brand => &self.brand,
            BuildAttribute::Device => &self.device,
            BuildAttribute::Hardware => &self.hardware,
            BuildAttribute::Product => &self.product,
            BuildAttribute::Board => &self.board,
            BuildAttribute::Bootloader => &self.bootloader,
            BuildAttribute::Serial => &self.serial,
        }
    }

    /// Multi-line dump for diagnostics. Not used by any check.
    pub fn device_info(&self) -> String {
        format!(
            "Build.PRODUCT: {}\n\
             Build.MANUFACTURER: {}\n\
             Build.BRAND: {}\n\
             Build.DEVICE: {}\n\
             Build.MODEL: {}\n\
             Build.HARDWARE: {}\n\
             Build.FINGERPRINT: {}",
            self.product,
            self.manufacturer,
            self.brand,
            self.device,
            self.model,
            self.hardware,
            self.fingerprint,
        )
    }
}

impl AttributeSource for BuildAttributes {
    fn attribute(&self, attribute: BuildAttribute) -> Option<String> {
        Some(self.get(attribute).to_string())
    }
}
