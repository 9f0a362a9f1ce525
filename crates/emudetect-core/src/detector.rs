// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Emudetect

//! Check orchestration.
//!
//! Checks run strictly in sequence, cheapest and most reliable first, and
//! the first positive one decides the run:
//!
//! 1. attribute patterns
//! 2. advanced checks: telephony, Genymotion/Andy/Nox files, kernel drivers,
//!    QEMU pipes, network interfaces, then QEMU properties *and* x86 files
//! 3. suspect packages

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use tracing::{debug, warn};

use crate::attributes::BuildAttributes;
use crate::checks::{self, FileCategory};
use crate::config::DetectorConfig;
use crate::platform::Platform;
use crate::verdict::{Signal, Verdict};

/// Emulator detector bound to one configuration and one set of probes.
#[derive(Clone)]
pub struct Detector {
    config: DetectorConfig,
    platform: Platform,
}

impl Detector {
    pub fn new(config: DetectorConfig, platform: Platform) -> Self {
        Self { config, platform }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Runs every check and reports whether this looks like an emulator.
    pub fn detect(&self) -> bool {
        self.evaluate().is_emulator
    }

    /// Like [`detect`](Self::detect), also naming the check that fired.
    pub fn evaluate(&self) -> Verdict {
        let verbose = self.config.is_debug();
        let attributes = BuildAttributes::from_source(self.platform.attributes.as_ref());
        verbose!(verbose, "{}", attributes.device_info());

        let basic = checks::check_basic(&attributes);
        verbose!(verbose, "Check basic {}", basic);
        let signal = if basic {
            Some(Signal::BasicAttributes)
        } else {
            let advanced = self.check_advanced();
            verbose!(verbose, "Check Advanced {}", advanced.is_some());
            advanced.or_else(|| {
                let package = checks::suspect_package(self.platform.packages.as_ref(), &self.config);
                verbose!(verbose, "Check Package Name {}", package.is_some());
                package.map(Signal::SuspectPackage)
            })
        };

        let verdict = Verdict::from(signal);
        verbose!(verbose, "This System is Emulator: {}", verdict.is_emulator);
        verdict
    }

    /// Diagnostic dump of the raw build attributes.
    pub fn device_info(&self) -> String {
        BuildAttributes::from_source(self.platform.attributes.as_ref()).device_info()
    }

    fn check_advanced(&self) -> Option<Signal> {
        let verbose = self.config.is_debug();
        let platform = &self.platform;
        let files = platform.files.as_ref();

        if let Some(signal) = checks::telephony_signal(
            platform.permissions.as_ref(),
            platform.telephony.as_ref(),
            self.config.is_check_telephony(),
            verbose,
        ) {
            return Some(Signal::Telephony(signal));
        }

        for category in [FileCategory::Genymotion, FileCategory::Andy, FileCategory::Nox] {
            if checks::check_files(files, category, verbose) {
                return Some(Signal::Files(category));
            }
        }

        if checks::check_qemu_drivers(files, verbose) {
            return Some(Signal::KernelDriver);
        }

        if checks::check_files(files, FileCategory::Pipes, verbose) {
            return Some(Signal::Files(FileCategory::Pipes));
        }

        if checks::check_ip(platform.permissions.as_ref(), platform.commands.as_ref(), verbose) {
            return Some(Signal::NetworkInterface);
        }

        // Both halves must hold here, unlike every earlier step.
        if checks::check_qemu_props(platform.properties.as_ref(), verbose)
            && checks::check_files(files, FileCategory::X86, verbose)
        {
            return Some(Signal::QemuPropertiesX86);
        }

        None
    }

    /// Runs detection on tokio's blocking pool.
    ///
    /// A run that panics resolves to a genuine-device verdict.
    pub async fn detect_async(&self) -> Verdict {
        let detector = self.clone();
        match tokio::task::spawn_blocking(move || detector.evaluate()).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!("Emulator detection task failed: {}", e);
                Verdict::genuine()
            }
        }
    }

    /// Runs detection on a dedicated thread and calls `on_result` exactly once.
    pub fn detect_with_callback<F>(&self, on_result: F) -> thread::JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let detector = self.clone();
        thread::spawn(move || {
            let is_emulator = panic::catch_unwind(AssertUnwindSafe(|| detector.detect()))
                .unwrap_or_else(|_| {
                    warn!("Emulator detection panicked; reporting genuine device");
                    false
                });
            debug!("This System is Emulator: {}", is_emulator);
            on_result(is_emulator);
        })
    }
}
