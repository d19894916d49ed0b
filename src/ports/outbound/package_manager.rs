use crate::orphan_detection::domain::{Package, PackageName};
use crate::shared::Result;

/// PackageManager port for the environment's package manager (pip)
///
/// This port abstracts listing, installing and removing distributions
/// so the use cases can run against a scripted fake in tests.
pub trait PackageManager {
    /// Lists every installed distribution, in the order the package manager reports them
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package manager cannot be executed or exits unsuccessfully
    /// - Its output cannot be parsed
    fn list_installed(&self) -> Result<Vec<Package>>;

    /// Installs a distribution by name
    ///
    /// # Errors
    /// Returns an error if the install command fails
    fn install(&self, name: &str) -> Result<()>;

    /// Removes a single distribution without asking for confirmation
    ///
    /// # Errors
    /// Returns an error if the uninstall command fails
    fn uninstall(&self, name: &PackageName) -> Result<()>;

    /// Human-readable form of the install command, used in hints
    fn install_hint(&self, name: &str) -> String;
}
