use crate::application::dto::{ScanRequest, ScanResponse};
use crate::orphan_detection::services::{OrphanDetector, PackageClassifier};
use crate::ports::outbound::{DependencyTreeReader, PackageManager, ProgressReporter};
use crate::shared::error::CleanerError;
use crate::shared::Result;

/// ScanEnvironmentUseCase - lists, classifies and detects orphans
///
/// Orchestrates the dependency lister, the classifier and the orphan
/// detector using generic dependency injection for all infrastructure.
///
/// # Type Parameters
/// * `PM` - PackageManager implementation
/// * `DT` - DependencyTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanEnvironmentUseCase<PM, DT, PR> {
    package_manager: PM,
    tree_reader: DT,
    progress_reporter: PR,
}

impl<PM, DT, PR> ScanEnvironmentUseCase<PM, DT, PR>
where
    PM: PackageManager,
    DT: DependencyTreeReader,
    PR: ProgressReporter,
{
    /// Creates a new ScanEnvironmentUseCase with injected dependencies
    pub fn new(package_manager: PM, tree_reader: DT, progress_reporter: PR) -> Self {
        Self {
            package_manager,
            tree_reader,
            progress_reporter,
        }
    }

    /// Executes the scan
    ///
    /// # Errors
    /// Returns an error if the dependency tree tool is missing and cannot be
    /// installed, or if listing packages or reading the tree fails
    pub fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        // Step 1: Make sure pipdeptree can run
        self.ensure_dependency_tool(&request)?;

        // Step 2: List, classify, detect
        self.progress_reporter
            .start_spinner("🔍 Scanning installed packages...");

        match self.scan() {
            Ok(response) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Detected {} package(s), {} orphaned",
                    response.records.len(),
                    response.orphans.len()
                ));
                Ok(response)
            }
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to scan installed packages");
                Err(e)
            }
        }
    }

    fn scan(&self) -> Result<ScanResponse> {
        let packages = self.package_manager.list_installed()?;
        let tree = self.tree_reader.read_dependency_tree()?;

        let records = PackageClassifier::classify(packages, &tree);
        let orphans = OrphanDetector::detect(&records);

        Ok(ScanResponse::new(records, orphans))
    }

    /// Installs the dependency tree tool when it is missing and allowed to
    ///
    /// No retry: a failed install is fatal.
    fn ensure_dependency_tool(&self, request: &ScanRequest) -> Result<()> {
        if self.tree_reader.is_available() {
            return Ok(());
        }

        let tool = self.tree_reader.tool_name().to_string();
        let install_hint = self.package_manager.install_hint(&tool);

        if !request.auto_install {
            return Err(CleanerError::DependencyToolUnavailable {
                tool,
                details: "Not installed, and automatic installation is disabled".to_string(),
                install_hint,
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("📦 {} not found. Installing...", tool));
        self.progress_reporter
            .start_spinner(&format!("Installing {}...", tool));

        if let Err(e) = self.package_manager.install(&tool) {
            self.progress_reporter
                .report_error(&format!("❌ Failed to install {}", tool));
            return Err(CleanerError::DependencyToolUnavailable {
                tool,
                details: format!("{:#}", e),
                install_hint,
            }
            .into());
        }

        if !self.tree_reader.is_available() {
            self.progress_reporter
                .report_error(&format!("❌ {} still cannot be run", tool));
            return Err(CleanerError::DependencyToolUnavailable {
                tool,
                details: "Installation finished but the tool still cannot be run".to_string(),
                install_hint,
            }
            .into());
        }

        self.progress_reporter
            .report_completion(&format!("✅ {} installed successfully.", tool));
        Ok(())
    }
}
