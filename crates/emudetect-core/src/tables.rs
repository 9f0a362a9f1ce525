// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Known emulator values.
//!
//! Everything here is constant. Behaviour is tuned through
//! [`DetectorConfig`](crate::DetectorConfig), never by editing these tables
//! at runtime.

/// Line numbers the stock Android emulator assigns to its virtual modems.
pub const PHONE_NUMBERS: &[&str] = &[
    "15555215554",
    "15555215556",
    "15555215558",
    "15555215560",
    "15555215562",
    "15555215564",
    "15555215566",
    "15555215568",
    "15555215570",
    "15555215572",
    "15555215574",
    "15555215576",
    "15555215578",
    "15555215580",
    "15555215582",
    "15555215584",
];

/// Placeholder IMEI/MEID values reported by emulators.
pub const DEVICE_IDS: &[&str] = &["000000000000000", "e21833235b6eef10", "012345678912345"];

/// IMSI of the emulator's fake SIM.
pub const IMSI_IDS: &[&str] = &["310260000000000"];

/// Operator name reported by the emulator's fake network.
pub const OPERATOR_NAME_ANDROID: &str = "android";

/// Genymotion daemon sockets
pub const GENY_FILES: &[&str] = &["/dev/socket/genyd", "/dev/socket/baseband_genyd"];

/// QEMU pipe sockets
pub const PIPES: &[&str] = &["/dev/socket/qemud", "/dev/qemu_pipe"];

/// x86 image markers. Relative paths, resolved against the working directory.
pub const X86_FILES: &[&str] = &[
    "ueventd.android_x86.rc",
    "x86.prop",
    "ueventd.ttVM_x86.rc",
    "init.ttVM_x86.rc",
    "fstab.ttVM_x86",
    "fstab.vbox86",
    "init.vbox86.rc",
    "ueventd.vbox86.rc",
];

/// Andy image markers
pub const ANDY_FILES: &[&str] = &["fstab.andy", "ueventd.andy.rc"];

/// Nox image markers
pub const NOX_FILES: &[&str] = &["fstab.nox", "init.nox.rc", "ueventd.nox.rc"];

/// Kernel driver names only emulated hardware registers.
pub const QEMU_DRIVERS: &[&str] = &["goldfish"];

/// Pseudo-files scanned for [`QEMU_DRIVERS`].
pub const DRIVER_FILES: &[&str] = &["/proc/tty/drivers", "/proc/cpuinfo"];

/// Bytes read from each of [`DRIVER_FILES`].
pub const DRIVER_READ_LIMIT: usize = 1024;

/// Guest address of the emulator's user-mode network stack.
pub const EMULATOR_IP: &str = "10.0.2.15";

/// Interfaces that carry [`EMULATOR_IP`] on an emulator.
pub const NETWORK_INTERFACES: &[&str] = &["wlan0", "tunl0", "eth0"];

/// Interface listing tool and the directory it runs from.
pub const NETCFG_PROGRAM: &str = "/system/bin/netcfg";
pub const NETCFG_WORKING_DIR: &str = "/system/bin/";

/// A system property and the substring an emulator reports for it.
///
/// `seek_value == None` means any value at all is suspicious.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    pub name: &'static str,
    pub seek_value: Option<&'static str>,
}

impl Property {
    const fn present(name: &'static str) -> Self {
        Self {
            name,
            seek_value: None,
        }
    }

    const fn containing(name: &'static str, seek_value: &'static str) -> Self {
        Self {
            name,
            seek_value: Some(seek_value),
        }
    }
}

/// QEMU-flavoured system properties scored by the property check.
pub const QEMU_PROPERTIES: &[Property] = &[
    Property::present("init.svc.qemud"),
    Property::present("init.svc.qemu-props"),
    Property::present("qemu.hw.mainkeys"),
    Property::present("qemu.sf.fake_camera"),
    Property::present("qemu.sf.lcd_density"),
    Property::containing("ro.bootloader", "unknown"),
    Property::containing("ro.bootmode", "unknown"),
    Property::containing("ro.hardware", "goldfish"),
    Property::present("ro.kernel.android.qemud"),
    Property::present("ro.kernel.qemu.gles"),
    Property::containing("ro.kernel.qemu", "1"),
    Property::containing("ro.product.device", "generic"),
    Property::containing("ro.product.model", "sdk"),
    Property::containing("ro.product.name", "sdk"),
    Property::present("ro.serialno"),
];

/// Matches in [`QEMU_PROPERTIES`] needed before the property check fires.
///
/// Fixed on purpose; changing it changes the detector's accuracy.
pub const MIN_PROPERTIES_THRESHOLD: usize = 5;

/// Packages that only ship on emulator images.
pub const DEFAULT_SUSPECT_PACKAGES: &[&str] = &[
    "com.google.android.launcher.layouts.genymotion",
    "com.bluestacks",
    "com.bignox.app",
];
