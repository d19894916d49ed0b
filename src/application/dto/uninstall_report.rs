/// UninstallReport - Outcome of the interactive uninstall use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    /// Packages removed successfully, in the order they were removed
    pub uninstalled: Vec<String>,
    /// Packages whose removal failed, with the error message
    pub failed: Vec<(String, String)>,
    /// Packages the user declined at the per-package confirmation
    pub skipped: Vec<String>,
}

impl UninstallReport {
    /// Returns true if no uninstall command was attempted
    pub fn is_untouched(&self) -> bool {
        self.uninstalled.is_empty() && self.failed.is_empty()
    }
}
