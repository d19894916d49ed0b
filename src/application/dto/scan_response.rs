use crate::orphan_detection::domain::PackageRecord;

/// ScanResponse - Result of scanning an environment
#[derive(Debug, Clone)]
pub struct ScanResponse {
    /// Every installed package, classified, in package manager order
    pub records: Vec<PackageRecord>,
    /// Records that are safe to offer for removal
    pub orphans: Vec<PackageRecord>,
}

impl ScanResponse {
    pub fn new(records: Vec<PackageRecord>, orphans: Vec<PackageRecord>) -> Self {
        Self { records, orphans }
    }
}
