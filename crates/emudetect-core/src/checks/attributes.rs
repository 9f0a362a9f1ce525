// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Attribute-pattern check over build attributes.

use crate::attributes::BuildAttributes;

const EMULATOR_PRODUCTS: &[&str] = &["sdk", "google_sdk", "sdk_x86", "vbox86p"];

fn contains_nox(value: &str) -> bool {
    value.to_lowercase().contains("nox")
}

/// True when any build attribute carries a known emulator marker.
pub fn check_basic(attributes: &BuildAttributes) -> bool {
    let model = attributes.model.as_str();
    let hardware = attributes.hardware.as_str();
    let product = attributes.product.as_str();

    let marked = attributes.fingerprint.starts_with("generic")
        || model.contains("google_sdk")
        || model.to_lowercase().contains("droid4x")
        || model.contains("Emulator")
        || model.contains("Android SDK built for x86")
        || attributes.manufacturer.contains("Genymotion")
        || hardware == "goldfish"
        || hardware == "vbox86"
        || EMULATOR_PRODUCTS.contains(&product)
        || contains_nox(&attributes.board)
        || contains_nox(&attributes.bootloader)
        || contains_nox(hardware)
        || contains_nox(product)
        || contains_nox(&attributes.serial);
    if marked {
        return true;
    }

    attributes.brand.starts_with("generic") && attributes.device.starts_with("generic")
}
