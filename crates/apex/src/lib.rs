mod version_updater;

use apibump_core::{DetectorSet, FileCategory};

pub use version_updater::{ApexVersionDetector, find_api_version, update_api_version};

/// Detectors for every versioned Apex category
#[must_use]
pub fn apex_detectors() -> DetectorSet {
    DetectorSet::new()
        .with(FileCategory::SourceUnit, Box::new(ApexVersionDetector))
        .with(FileCategory::TriggerUnit, Box::new(ApexVersionDetector))
}
