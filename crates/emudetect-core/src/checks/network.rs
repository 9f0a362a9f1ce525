// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Network-interface check.

use crate::probe::{CommandProbe, Permission, PermissionProbe, ProbeCommand};
use crate::tables::{EMULATOR_IP, NETWORK_INTERFACES};

/// True when `netcfg` lists the emulator's guest address on a known interface.
///
/// Needs the internet permission. A failed subprocess counts as empty output.
pub fn check_ip(
    permissions: &dyn PermissionProbe,
    commands: &dyn CommandProbe,
    verbose: bool,
) -> bool {
    if !permissions.is_granted(Permission::Internet) {
        return false;
    }

    let net_data = match commands.run(&ProbeCommand::netcfg()) {
        Ok(output) => output,
        Err(e) => {
            verbose!(verbose, "netcfg failed: {}", e);
            String::new()
        }
    };
    verbose!(verbose, "netcfg data -> {}", net_data);

    if interfaces_report_emulator_ip(&net_data) {
        verbose!(verbose, "Check IP is detected");
        return true;
    }
    false
}

/// Scans interface listing lines for the emulator address on a known interface.
pub fn interfaces_report_emulator_ip(net_data: &str) -> bool {
    net_data.split('\n').any(|line| {
        NETWORK_INTERFACES
            .iter()
            .any(|interface| line.contains(interface))
            && line.contains(EMULATOR_IP)
    })
}
