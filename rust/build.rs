// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

// Build script for the emulator detector JNI library
// Ensures proper linking on Android

fn main() {
    // Tell Cargo to link against log on Android
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("android") {
        println!("cargo:rustc-link-lib=log");
    }
}
