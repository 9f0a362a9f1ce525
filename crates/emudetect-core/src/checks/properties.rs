// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! System-property scoring check.

use crate::probe::SystemProperties;
use crate::tables::{Property, MIN_PROPERTIES_THRESHOLD, QEMU_PROPERTIES};

fn matches(property: &Property, value: Option<&str>) -> bool {
    match (property.seek_value, value) {
        (None, Some(_)) => true,
        (Some(seek_value), Some(value)) => value.contains(seek_value),
        (_, None) => false,
    }
}

/// Number of [`QEMU_PROPERTIES`] entries whose value looks emulated.
pub fn qemu_property_score(properties: &dyn SystemProperties, verbose: bool) -> usize {
    QEMU_PROPERTIES
        .iter()
        .filter(|property| {
            let value = match properties.system_property(property.name) {
                Ok(value) => value,
                Err(e) => {
                    verbose!(verbose, "Property {} unavailable: {}", property.name, e);
                    None
                }
            };
            matches(property, value.as_deref())
        })
        .count()
}

/// True when at least [`MIN_PROPERTIES_THRESHOLD`] properties look emulated.
pub fn check_qemu_props(properties: &dyn SystemProperties, verbose: bool) -> bool {
    let found_props = qemu_property_score(properties, verbose);
    if found_props >= MIN_PROPERTIES_THRESHOLD {
        verbose!(verbose, "Check QEmuProps is detected ({} matches)", found_props);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use crate::probe::MockSystemProperties;
    use crate::testing::FakeDevice;
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    /// Device where exactly the table entries at `indices` match.
    fn device_matching(indices: &[usize]) -> FakeDevice {
        indices.iter().fold(FakeDevice::default(), |device, &index| {
            let property = QEMU_PROPERTIES[index];
            device.with_property(property.name, property.seek_value.unwrap_or("1"))
        })
    }

    #[test]
    fn test_boundary() {
        let four = device_matching(&[0, 1, 2, 3]);
        assert_eq!(qemu_property_score(&four, false), 4);
        assert!(!check_qemu_props(&four, false));

        let five = device_matching(&[0, 1, 2, 3, 4]);
        assert_eq!(qemu_property_score(&five, false), 5);
        assert!(check_qemu_props(&five, false));
    }

    #[test]
    fn test_seek_value_is_substring() {
        let device = FakeDevice::default()
            .with_property("ro.hardware", "goldfish_arm")
            .with_property("ro.product.model", "sdk_gphone64_arm64")
            .with_property("ro.product.name", "sdk_gphone64_arm64")
            .with_property("ro.product.device", "generic_arm64")
            .with_property("ro.kernel.qemu", "1");
        assert_eq!(qemu_property_score(&device, false), 5);
    }

    #[test]
    fn test_wrong_values_do_not_count() {
        let device = FakeDevice::default()
            .with_property("ro.hardware", "qcom")
            .with_property("ro.bootloader", "ripcurrent-14.3")
            .with_property("ro.kernel.qemu", "0")
            .with_property("ro.product.model", "Pixel 8");
        assert_eq!(qemu_property_score(&device, false), 0);
    }

    #[test]
    fn test_any_value_counts_for_presence_entries() {
        let device = FakeDevice::default().with_property("ro.serialno", "");
        assert_eq!(qemu_property_score(&device, false), 1);
    }

    #[test]
    fn test_lookup_failures_count_as_absent() {
        let mut properties = MockSystemProperties::new();
        properties
            .expect_system_property()
            .times(QEMU_PROPERTIES.len())
            .returning(|name| {
                Err(ProbeError::Property {
                    name: name.to_string(),
                    reason: "service unavailable".into(),
                })
            });
        assert!(!check_qemu_props(&properties, true));
    }

    proptest! {
        #[test]
        fn score_threshold(indices in subsequence((0..QEMU_PROPERTIES.len()).collect::<Vec<_>>(), 0..=QEMU_PROPERTIES.len())) {
            let device = device_matching(&indices);
            prop_assert_eq!(qemu_property_score(&device, false), indices.len());
            prop_assert_eq!(check_qemu_props(&device, false), indices.len() >= 5);
        }
    }
}
