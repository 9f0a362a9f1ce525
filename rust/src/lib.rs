// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Emudetect JNI bindings
//!
//! The Kotlin side captures what only the framework can see (Build fields,
//! telephony, permissions, resolvable packages) into a JSON snapshot. File,
//! subprocess and system-property probes run natively.

use anyhow::{Context, Result};
use jni::objects::{JClass, JString};
use jni::sys::{jboolean, jstring, JNI_TRUE};
use jni::JNIEnv;

use emudetect::{Detector, DetectorConfig, DeviceSnapshot, EmulatorDetectionResult, Platform};

#[cfg(target_os = "android")]
use android_logger::Config;
#[cfg(target_os = "android")]
use log::LevelFilter;

const FALLBACK_RESULT: &str = r#"{"is_emulator":false,"detection_method_names":[]}"#;

/// Runs detection for a JSON config and snapshot, returning the verdict as JSON.
///
/// An empty config string selects the defaults.
pub fn detect_json(config_json: &str, snapshot_json: &str) -> Result<String> {
    let config = if config_json.trim().is_empty() {
        DetectorConfig::default()
    } else {
        DetectorConfig::from_json_str(config_json).context("Invalid detector config")?
    };
    let snapshot = DeviceSnapshot::from_json_str(snapshot_json).context("Invalid device snapshot")?;

    let command_timeout = config.command_timeout();
    let detector = Detector::new(config, Platform::from_snapshot(snapshot, command_timeout));
    let verdict = detector.evaluate();
    log::info!("Emulator detection finished: is_emulator={}", verdict.is_emulator);

    Ok(serde_json::to_string(&EmulatorDetectionResult::from(&verdict))?)
}

/// Device-info dump for a JSON snapshot.
pub fn device_info(snapshot_json: &str) -> Result<String> {
    let snapshot = DeviceSnapshot::from_json_str(snapshot_json).context("Invalid device snapshot")?;
    Ok(snapshot.attributes.device_info())
}

fn read_string(env: &mut JNIEnv, value: &JString) -> String {
    if value.is_null() {
        return String::new();
    }
    match env.get_string(value) {
        Ok(s) => s.to_string_lossy().to_string(),
        Err(_) => String::new(),
    }
}

fn to_jstring(env: &JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(jstr) => jstr.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

// ============================================================================
// JNI Bindings
// ============================================================================

/// Initialize logging for Android
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "C" fn Java_com_emudetect_RustEmulatorDetector_nativeInit(
    _env: JNIEnv,
    _class: JClass,
    verbose: jboolean,
) {
    let level = if verbose == JNI_TRUE {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    android_logger::init_once(
        Config::default()
            .with_max_level(level)
            .with_tag("RustEmulatorDetector"),
    );
}

#[cfg(not(target_os = "android"))]
#[no_mangle]
pub extern "C" fn Java_com_emudetect_RustEmulatorDetector_nativeInit(
    _env: JNIEnv,
    _class: JClass,
    verbose: jboolean,
) {
    let level = if verbose == JNI_TRUE { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Detect emulator - JNI entry point
///
/// Returns JSON string with EmulatorDetectionResult
#[no_mangle]
pub extern "C" fn Java_com_emudetect_RustEmulatorDetector_nativeDetect(
    mut env: JNIEnv,
    _class: JClass,
    config_json: JString,
    snapshot_json: JString,
) -> jstring {
    let config_str = read_string(&mut env, &config_json);
    let snapshot_str = read_string(&mut env, &snapshot_json);

    let result = std::panic::catch_unwind(|| detect_json(&config_str, &snapshot_str));
    match result {
        Ok(Ok(json)) => to_jstring(&env, &json),
        Ok(Err(e)) => {
            log::error!("Emulator detection failed: {:#}", e);
            to_jstring(&env, FALLBACK_RESULT)
        }
        Err(_) => {
            log::error!("Emulator detection panicked");
            to_jstring(&env, FALLBACK_RESULT)
        }
    }
}

/// Device info - JNI entry point
#[no_mangle]
pub extern "C" fn Java_com_emudetect_RustEmulatorDetector_nativeDeviceInfo(
    mut env: JNIEnv,
    _class: JClass,
    snapshot_json: JString,
) -> jstring {
    let snapshot_str = read_string(&mut env, &snapshot_json);
    match device_info(&snapshot_str) {
        Ok(info) => to_jstring(&env, &info),
        Err(e) => {
            log::error!("Device info failed: {:#}", e);
            to_jstring(&env, "")
        }
    }
}
