use crate::orphan_detection::domain::{PackageCategory, PackageRecord};

/// OrphanDetector selects packages that are safe to offer for removal
///
/// An orphan is an application package that no other installed package uses.
pub struct OrphanDetector;

impl OrphanDetector {
    pub fn is_orphan(record: &PackageRecord) -> bool {
        record.category() == PackageCategory::Application && record.used_by().is_empty()
    }

    /// Returns the orphaned records, keeping their original order
    pub fn detect(records: &[PackageRecord]) -> Vec<PackageRecord> {
        records
            .iter()
            .filter(|r| Self::is_orphan(r))
            .cloned()
            .collect()
    }
}
