// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Detection verdicts.

use serde::{Deserialize, Serialize};

use crate::checks::files::FileCategory;
use crate::checks::telephony::TelephonySignal;

/// The check that decided a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    BasicAttributes,
    Telephony(TelephonySignal),
    Files(FileCategory),
    KernelDriver,
    NetworkInterface,
    /// Property score cleared the threshold and an x86 image marker exists.
    QemuPropertiesX86,
    SuspectPackage(String),
}

impl Signal {
    /// Stable, PII-free identifier of the signal.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::BasicAttributes => "BASIC_ATTRIBUTES",
            Self::Telephony(signal) => signal.method_name(),
            Self::Files(category) => category.method_name(),
            Self::KernelDriver => "KERNEL_DRIVER",
            Self::NetworkInterface => "NETWORK_INTERFACE",
            Self::QemuPropertiesX86 => "QEMU_PROPERTIES_X86",
            Self::SuspectPackage(_) => "SUSPECT_PACKAGE",
        }
    }
}

/// Outcome of one detection run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Verdict {
    pub is_emulator: bool,
    pub signal: Option<Signal>,
}

impl Verdict {
    pub fn emulator(signal: Signal) -> Self {
        Self {
            is_emulator: true,
            signal: Some(signal),
        }
    }

    pub fn genuine() -> Self {
        Self::default()
    }
}

impl From<Option<Signal>> for Verdict {
    fn from(signal: Option<Signal>) -> Self {
        signal.map_or_else(Self::genuine, Self::emulator)
    }
}

/// Wire shape of a verdict handed to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorDetectionResult {
    pub is_emulator: bool,
    pub detection_method_names: Vec<String>, // Non-PII identifiers
}

impl From<&Verdict> for EmulatorDetectionResult {
    fn from(verdict: &Verdict) -> Self {
        Self {
            is_emulator: verdict.is_emulator,
            detection_method_names: verdict
                .signal
                .iter()
                .map(|signal| signal.method_name().to_string())
                .collect(),
        }
    }
}
