// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Telephony checks against the emulator's fake modem and SIM.

use crate::error::ProbeError;
use crate::probe::{Permission, PermissionProbe, TelephonyProbe};
use crate::tables::{DEVICE_IDS, IMSI_IDS, OPERATOR_NAME_ANDROID, PHONE_NUMBERS};

/// Telephony sub-check that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelephonySignal {
    PhoneNumber,
    DeviceId,
    SubscriberId,
    OperatorName,
}

impl TelephonySignal {
    pub fn method_name(self) -> &'static str {
        match self {
            Self::PhoneNumber => "TELEPHONY_PHONE_NUMBER",
            Self::DeviceId => "TELEPHONY_DEVICE_ID",
            Self::SubscriberId => "TELEPHONY_SUBSCRIBER_ID",
            Self::OperatorName => "TELEPHONY_OPERATOR_NAME",
        }
    }
}

/// Unwraps a probe value, logging and dropping failures.
fn probe_value(
    value: Result<Option<String>, ProbeError>,
    field: &str,
    verbose: bool,
) -> Option<String> {
    match value {
        Ok(value) => value,
        Err(e) => {
            verbose!(verbose, "Telephony {} unavailable: {}", field, e);
            None
        }
    }
}

fn is_known(value: Option<&str>, known: &[&str]) -> bool {
    value.is_some_and(|value| known.iter().any(|k| k.eq_ignore_ascii_case(value)))
}

/// The first telephony sub-check that fires, if telephony checks are enabled,
/// permitted and supported.
///
/// The flag is consulted first so a disabled check never touches a probe.
pub fn telephony_signal(
    permissions: &dyn PermissionProbe,
    telephony: &dyn TelephonyProbe,
    enabled: bool,
    verbose: bool,
) -> Option<TelephonySignal> {
    if !enabled || !permissions.is_granted(Permission::ReadPhoneState) {
        return None;
    }
    let supported = telephony.supports_telephony();
    verbose!(verbose, "Supported TelePhony: {}", supported);
    if !supported {
        return None;
    }

    let phone_number = probe_value(telephony.line1_number(), "line1 number", verbose);
    if is_known(phone_number.as_deref(), PHONE_NUMBERS) {
        verbose!(verbose, "Check phone number is detected");
        return Some(TelephonySignal::PhoneNumber);
    }

    let device_id = probe_value(telephony.device_id(), "device id", verbose);
    if is_known(device_id.as_deref(), DEVICE_IDS) {
        verbose!(verbose, "Check device id is detected");
        return Some(TelephonySignal::DeviceId);
    }

    let imsi = probe_value(telephony.subscriber_id(), "subscriber id", verbose);
    if is_known(imsi.as_deref(), IMSI_IDS) {
        verbose!(verbose, "Check imsi is detected");
        return Some(TelephonySignal::SubscriberId);
    }

    let operator_name = probe_value(telephony.network_operator_name(), "operator name", verbose);
    if is_known(operator_name.as_deref(), &[OPERATOR_NAME_ANDROID]) {
        verbose!(verbose, "Check operator name android is detected");
        return Some(TelephonySignal::OperatorName);
    }

    None
}

pub fn check_telephony(
    permissions: &dyn PermissionProbe,
    telephony: &dyn TelephonyProbe,
    enabled: bool,
    verbose: bool,
) -> bool {
    telephony_signal(permissions, telephony, enabled, verbose).is_some()
}
