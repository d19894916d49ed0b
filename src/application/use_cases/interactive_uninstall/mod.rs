use crate::application::dto::{UninstallOption, UninstallReport, UninstallRequest};
use crate::orphan_detection::domain::PackageRecord;
use crate::ports::outbound::{PackageManager, ProgressReporter, Prompter};
use crate::shared::Result;

const ANY_QUESTION: &str = "\nDo you want to uninstall any of these packages? (y/n): ";
const OPTION_QUESTION: &str = "Enter 1 or 2: ";
const SELECTION_QUESTION: &str =
    "Enter package name(s) to uninstall (comma separated), or 'q' to quit: ";
const MORE_QUESTION: &str = "\nDo you want to uninstall more packages? (y/n): ";

/// InteractiveUninstallUseCase - asks which orphans to remove and removes them
///
/// Only packages from the request's orphan list are ever passed to the
/// package manager. A failed removal is reported and the remaining
/// packages are still processed; there is no rollback.
///
/// # Type Parameters
/// * `PM` - PackageManager implementation
/// * `P` - Prompter implementation
/// * `PR` - ProgressReporter implementation
pub struct InteractiveUninstallUseCase<PM, P, PR> {
    package_manager: PM,
    prompter: P,
    progress_reporter: PR,
}

impl<PM, P, PR> InteractiveUninstallUseCase<PM, P, PR>
where
    PM: PackageManager,
    P: Prompter,
    PR: ProgressReporter,
{
    pub fn new(package_manager: PM, prompter: P, progress_reporter: PR) -> Self {
        Self {
            package_manager,
            prompter,
            progress_reporter,
        }
    }

    /// Runs the prompt flow
    ///
    /// # Errors
    /// Returns an error only if the console itself fails; uninstall
    /// failures are collected in the report
    pub fn execute(&self, request: UninstallRequest) -> Result<UninstallReport> {
        let mut report = UninstallReport::default();

        if request.orphans.is_empty() {
            return Ok(report);
        }

        if !self.confirm(ANY_QUESTION)? {
            self.prompter.say("No packages were uninstalled.");
            return Ok(report);
        }

        self.prompter.say("\nChoose an option:");
        self.prompter.say("1. Uninstall all orphaned packages");
        self.prompter.say("2. Uninstall specific package(s)");

        let option = self
            .prompter
            .ask(OPTION_QUESTION)?
            .and_then(|answer| answer.parse::<UninstallOption>().ok());

        match option {
            Some(UninstallOption::All) => {
                self.uninstall_all(&request, &mut report)?;
                self.prompter
                    .say("\nFinished uninstalling selected orphaned packages.");
            }
            Some(UninstallOption::Specific) => self.uninstall_specific(&request, &mut report)?,
            None => {
                self.prompter.say("Invalid option. Exiting.");
                return Ok(report);
            }
        }

        self.report_summary(&report);
        Ok(report)
    }

    /// Resolves a comma-separated answer against the orphan list
    ///
    /// Unknown names, duplicates and packages already removed in this
    /// session are dropped. Matching ignores case and `-`/`_`/`.` spelling.
    pub fn select<'a>(
        input: &str,
        orphans: &'a [PackageRecord],
        report: &UninstallReport,
    ) -> Vec<&'a PackageRecord> {
        let mut selected: Vec<&PackageRecord> = Vec::new();

        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let Some(record) = orphans.iter().find(|r| r.package_name().matches(part)) else {
                continue;
            };
            let already_removed = report.uninstalled.iter().any(|n| n == record.name());
            let already_selected = selected.iter().any(|r| r.name() == record.name());
            if !already_removed && !already_selected {
                selected.push(record);
            }
        }

        selected
    }

    fn uninstall_all(&self, request: &UninstallRequest, report: &mut UninstallReport) -> Result<()> {
        for record in &request.orphans {
            self.uninstall_one(record, request.confirm_each, report)?;
        }
        Ok(())
    }

    fn uninstall_specific(
        &self,
        request: &UninstallRequest,
        report: &mut UninstallReport,
    ) -> Result<()> {
        loop {
            let Some(input) = self.prompter.ask(SELECTION_QUESTION)? else {
                break;
            };
            let input = input.trim();
            if input.eq_ignore_ascii_case("q") {
                break;
            }

            let selected = Self::select(input, &request.orphans, report);
            if selected.is_empty() {
                self.prompter.say("No valid packages selected. Try again.");
                continue;
            }

            for record in selected {
                self.uninstall_one(record, request.confirm_each, report)?;
            }

            if !self.confirm(MORE_QUESTION)? {
                break;
            }
        }
        Ok(())
    }

    fn uninstall_one(
        &self,
        record: &PackageRecord,
        confirm_each: bool,
        report: &mut UninstallReport,
    ) -> Result<()> {
        let name = record.name().to_string();

        if confirm_each {
            let question = format!(
                "Do you want to uninstall {} ({})? (y/n): ",
                name,
                record.version()
            );
            if !self.confirm(&question)? {
                report.skipped.push(name);
                return Ok(());
            }
        }

        self.progress_reporter
            .report(&format!("\n🗑️  Uninstalling {}...", name));

        match self.package_manager.uninstall(record.package_name()) {
            Ok(()) => {
                self.progress_reporter
                    .report(&format!("✅ Uninstalled {} ({})", name, record.version()));
                report.uninstalled.push(name);
            }
            Err(e) => {
                let details = format!("{:#}", e);
                self.progress_reporter
                    .report_error(&format!("❌ Failed to uninstall {}: {}", name, details));
                report.failed.push((name, details));
            }
        }

        Ok(())
    }

    /// Asks a y/n question; anything but `y` (and end of input) is "no"
    fn confirm(&self, question: &str) -> Result<bool> {
        Ok(self
            .prompter
            .ask(question)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }

    fn report_summary(&self, report: &UninstallReport) {
        if report.is_untouched() && report.skipped.is_empty() {
            return;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Uninstall complete: {} removed, {} failed, {} skipped",
            report.uninstalled.len(),
            report.failed.len(),
            report.skipped.len()
        ));

        for (name, _) in &report.failed {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {} is still installed", name));
        }
    }
}
