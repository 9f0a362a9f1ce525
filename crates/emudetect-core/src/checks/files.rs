// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! File-presence checks.

use std::path::Path;

use crate::probe::FileProbe;
use crate::tables::{ANDY_FILES, GENY_FILES, NOX_FILES, PIPES, X86_FILES};

/// Emulator vendor families identified by marker files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Genymotion,
    Andy,
    Nox,
    Pipes,
    X86,
}

impl FileCategory {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Genymotion => GENY_FILES,
            Self::Andy => ANDY_FILES,
            Self::Nox => NOX_FILES,
            Self::Pipes => PIPES,
            Self::X86 => X86_FILES,
        }
    }

    /// Short label used in diagnostic logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Genymotion => "Geny",
            Self::Andy => "Andy",
            Self::Nox => "Nox",
            Self::Pipes => "Pipes",
            Self::X86 => "X86",
        }
    }

    pub fn method_name(self) -> &'static str {
        match self {
            Self::Genymotion => "FILES_GENYMOTION",
            Self::Andy => "FILES_ANDY",
            Self::Nox => "FILES_NOX",
            Self::Pipes => "FILES_PIPES",
            Self::X86 => "FILES_X86",
        }
    }
}

/// True when any marker file of `category` exists.
pub fn check_files(files: &dyn FileProbe, category: FileCategory, verbose: bool) -> bool {
    check_paths(files, category.paths(), category.label(), verbose)
}

/// True when any of `paths` exists. Existence alone counts; readability is not required.
pub fn check_paths(files: &dyn FileProbe, paths: &[&str], label: &str, verbose: bool) -> bool {
    for path in paths {
        if files.exists(Path::new(path)) {
            verbose!(verbose, "Check {} is detected", label);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::MockFileProbe;
    use crate::testing::FakeDevice;
    use rstest::rstest;

    #[test]
    fn test_empty_list_never_probes() {
        let files = MockFileProbe::new();
        assert!(!check_paths(&files, &[], "Empty", true));
    }

    #[test]
    fn test_no_path_exists() {
        let device = FakeDevice::default();
        for category in [
            FileCategory::Genymotion,
            FileCategory::Andy,
            FileCategory::Nox,
            FileCategory::Pipes,
            FileCategory::X86,
        ] {
            assert!(!check_files(&device, category, false));
        }
    }

    #[rstest]
    #[case(FileCategory::Genymotion, "/dev/socket/baseband_genyd")]
    #[case(FileCategory::Andy, "ueventd.andy.rc")]
    #[case(FileCategory::Nox, "init.nox.rc")]
    #[case(FileCategory::Pipes, "/dev/qemu_pipe")]
    #[case(FileCategory::X86, "fstab.vbox86")]
    fn test_any_existing_path_matches(#[case] category: FileCategory, #[case] path: &str) {
        let device = FakeDevice::default().with_file(path, b"");
        assert!(check_files(&device, category, false));
    }

    #[test]
    fn test_stops_at_first_hit() {
        let mut files = MockFileProbe::new();
        files
            .expect_exists()
            .withf(|path| path.to_str() == Some("/dev/socket/genyd"))
            .times(1)
            .return_const(true);
        assert!(check_files(&files, FileCategory::Genymotion, false));
    }

    #[test]
    fn test_unreadable_file_still_counts() {
        let device = FakeDevice::default().with_unreadable_file("/dev/socket/qemud");
        assert!(check_files(&device, FileCategory::Pipes, false));
    }

    #[test_log::test]
    fn test_verbose_logging_does_not_change_result() {
        let device = FakeDevice::default().with_file("fstab.nox", b"");
        assert!(check_files(&device, FileCategory::Nox, true));
    }
}
