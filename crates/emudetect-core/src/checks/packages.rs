// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Suspect-package check.

use crate::config::DetectorConfig;
use crate::probe::PackageProbe;

/// First configured suspect package that resolves to a launchable activity.
///
/// Skipped entirely, without probe calls, when the check is disabled or
/// no packages are configured.
pub fn suspect_package(packages: &dyn PackageProbe, config: &DetectorConfig) -> Option<String> {
    let suspects = config.suspect_packages();
    if !config.is_check_package() || suspects.is_empty() {
        return None;
    }

    let verbose = config.is_debug();
    for package in suspects {
        match packages.has_launchable_activity(package) {
            Ok(true) => {
                verbose!(verbose, "Check package name is detected: {}", package);
                return Some(package.clone());
            }
            Ok(false) => {}
            Err(e) => verbose!(verbose, "Resolving {} failed: {}", package, e),
        }
    }
    None
}

pub fn check_package_name(packages: &dyn PackageProbe, config: &DetectorConfig) -> bool {
    suspect_package(packages, config).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::probe::MockPackageProbe;
    use crate::testing::FakeDevice;
    use mockall::Sequence;

    fn config_with(packages: &[&str]) -> DetectorConfig {
        let mut config: DetectorConfig =
            DetectorConfig::from_json_str(r#"{"suspect_packages": []}"#).unwrap();
        config.add_suspect_packages(packages.iter().copied());
        config
    }

    #[test]
    fn test_empty_list_makes_no_probe_calls() {
        let packages = MockPackageProbe::new();
        assert!(!check_package_name(&packages, &config_with(&[])));

        let mut disabled = config_with(&[]);
        disabled.set_check_package(false);
        assert!(!check_package_name(&packages, &disabled));
    }

    #[test]
    fn test_disabled_flag_makes_no_probe_calls() {
        let device = FakeDevice::default().with_launchable("com.bluestacks");
        let mut config = DetectorConfig::default();
        config.set_check_package(false);
        assert!(!check_package_name(&device, &config));
        assert_eq!(device.package_calls(), 0);
    }

    #[test]
    fn test_default_packages_detect_bluestacks() {
        let device = FakeDevice::default().with_launchable("com.bluestacks");
        assert_eq!(
            suspect_package(&device, &DetectorConfig::default()),
            Some("com.bluestacks".to_string())
        );
        // genymotion launcher is probed first, nox never
        assert_eq!(device.package_calls(), 2);
    }

    #[test]
    fn test_nothing_resolves() {
        let device = FakeDevice::default();
        assert!(!check_package_name(&device, &DetectorConfig::default()));
        assert_eq!(device.package_calls(), 3);
    }

    #[test]
    fn test_probes_in_insertion_order_and_skips_failures() {
        let mut seq = Sequence::new();
        let mut packages = MockPackageProbe::new();
        packages
            .expect_has_launchable_activity()
            .withf(|package| package == "first.pkg")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|package| Err(ProbeError::Unavailable(package.to_string())));
        packages
            .expect_has_launchable_activity()
            .withf(|package| package == "second.pkg")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let config = config_with(&["first.pkg", "second.pkg", "third.pkg"]);
        assert_eq!(
            suspect_package(&packages, &config),
            Some("second.pkg".to_string())
        );
    }
}
