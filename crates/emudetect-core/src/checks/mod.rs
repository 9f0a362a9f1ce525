// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Signal checks.
//!
//! Each check reduces probe output to a single boolean and never fails:
//! unavailable or failing probes count as "signal absent".

pub mod attributes;
pub mod files;
pub mod kernel;
pub mod network;
pub mod packages;
pub mod properties;
pub mod telephony;

pub use attributes::check_basic;
pub use files::{check_files, check_paths, FileCategory};
pub use kernel::check_qemu_drivers;
pub use network::{check_ip, interfaces_report_emulator_ip};
pub use packages::{check_package_name, suspect_package};
pub use properties::{check_qemu_props, qemu_property_score};
pub use telephony::{check_telephony, telephony_signal, TelephonySignal};
