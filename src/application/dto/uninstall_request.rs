use crate::orphan_detection::domain::PackageRecord;

/// UninstallRequest - Request DTO for the interactive uninstall use case
#[derive(Debug, Clone)]
pub struct UninstallRequest {
    /// Packages that may be offered for removal
    pub orphans: Vec<PackageRecord>,
    /// Ask before removing each package
    pub confirm_each: bool,
}

impl UninstallRequest {
    pub fn new(orphans: Vec<PackageRecord>, confirm_each: bool) -> Self {
        Self {
            orphans,
            confirm_each,
        }
    }
}
