// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Kernel driver check.

use std::path::Path;

use crate::probe::FileProbe;
use crate::tables::{DRIVER_FILES, DRIVER_READ_LIMIT, QEMU_DRIVERS};

/// True when an emulated kernel driver shows up in the head of
/// `/proc/tty/drivers` or `/proc/cpuinfo`.
pub fn check_qemu_drivers(files: &dyn FileProbe, verbose: bool) -> bool {
    for driver_file in DRIVER_FILES {
        let path = Path::new(driver_file);
        if !(files.exists(path) && files.is_readable(path)) {
            continue;
        }

        let data = match files.read_head(path, DRIVER_READ_LIMIT) {
            Ok(data) => data,
            Err(e) => {
                verbose!(verbose, "Reading {} failed: {}", driver_file, e);
                continue;
            }
        };

        let driver_data = String::from_utf8_lossy(&data);
        if QEMU_DRIVERS
            .iter()
            .any(|driver| driver_data.contains(driver))
        {
            verbose!(verbose, "Check QEmuDrivers is detected");
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDevice;

    #[test]
    fn test_goldfish_in_tty_drivers() {
        let device = FakeDevice::default().with_file(
            "/proc/tty/drivers",
            b"/dev/tty /dev/tty 5 0 system:/dev/tty\ngoldfish_tty /dev/ttyGF 253 0-3 serial\n",
        );
        assert!(check_qemu_drivers(&device, false));
    }

    #[test]
    fn test_goldfish_in_cpuinfo() {
        let device = FakeDevice::default()
            .with_file("/proc/tty/drivers", b"/dev/tty /dev/tty 5 0 system:/dev/tty\n")
            .with_file("/proc/cpuinfo", b"Processor\t: ARMv7\nHardware\t: Goldfish\nhardware: goldfish\n");
        assert!(check_qemu_drivers(&device, false));
    }

    #[test]
    fn test_real_hardware() {
        let device = FakeDevice::default()
            .with_file("/proc/tty/drivers", b"/dev/tty /dev/tty 5 0 system:/dev/tty\n")
            .with_file("/proc/cpuinfo", b"Hardware\t: Qualcomm Technologies, Inc SM8550\n");
        assert!(!check_qemu_drivers(&device, false));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let device = FakeDevice::default().with_file("/proc/cpuinfo", b"Hardware\t: Goldfish\n");
        assert!(!check_qemu_drivers(&device, false));
    }

    #[test]
    fn test_only_first_kilobyte_is_scanned() {
        let mut contents = vec![b' '; DRIVER_READ_LIMIT];
        contents.extend_from_slice(b"goldfish");
        let device = FakeDevice::default().with_file("/proc/cpuinfo", &contents);
        assert!(!check_qemu_drivers(&device, false));
    }

    #[test]
    fn test_unreadable_files_are_skipped() {
        let device = FakeDevice::default()
            .with_unreadable_file("/proc/tty/drivers")
            .with_unreadable_file("/proc/cpuinfo");
        assert!(!check_qemu_drivers(&device, true));
    }

    #[test]
    fn test_missing_files() {
        assert!(!check_qemu_drivers(&FakeDevice::default(), false));
    }
}
