use crate::application::read_models::{PackageView, ReportReadModel};
use crate::application::read_models::report_read_model_builder::{
    APPLICATION_LABEL, SYSTEM_LABEL,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Minimum width of the Package column
const MIN_NAME_WIDTH: usize = 20;

/// Minimum width of the Version column
const MIN_VERSION_WIDTH: usize = 10;

/// Width of the separator line under the header
const SEPARATOR_WIDTH: usize = 50;

/// TableFormatter adapter for the console report
///
/// Renders a Package / Version / Used By table followed by the orphan list.
/// Colors are only emitted when requested (i.e. when stdout is a terminal).
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self { colored: false }
    }

    pub fn with_colors(colored: bool) -> Self {
        Self { colored }
    }

    fn column_widths(packages: &[PackageView]) -> (usize, usize) {
        let name_width = packages
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);
        let version_width = packages
            .iter()
            .map(|p| p.version.chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_VERSION_WIDTH);
        (name_width, version_width)
    }

    fn paint_label(&self, label: &str) -> String {
        if !self.colored {
            return label.to_string();
        }
        match label {
            SYSTEM_LABEL => label.red().to_string(),
            APPLICATION_LABEL => label.green().to_string(),
            _ => label.yellow().to_string(),
        }
    }

    fn paint_heading(&self, heading: &str) -> String {
        if self.colored {
            heading.bold().to_string()
        } else {
            heading.to_string()
        }
    }

    fn write_table(&self, out: &mut String, packages: &[PackageView]) -> std::fmt::Result {
        let (name_width, version_width) = Self::column_widths(packages);

        let header = format!(
            "{:<name_width$} {:<version_width$} {}",
            "Package", "Version", "Used By"
        );
        writeln!(out, "{}", self.paint_heading(&header))?;
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH.max(header.len())))?;

        for package in packages {
            writeln!(
                out,
                "{:<name_width$} {:<version_width$} {}",
                package.name,
                package.version,
                self.paint_label(&package.used_by_label)
            )?;
        }
        Ok(())
    }

    fn write_orphans(&self, out: &mut String, model: &ReportReadModel) -> std::fmt::Result {
        if model.orphans.is_empty() {
            writeln!(out, "\nNo orphaned packages safe to uninstall.")?;
            return Ok(());
        }

        writeln!(
            out,
            "\n{}",
            self.paint_heading("Orphaned packages safe to uninstall:")
        )?;
        for orphan in &model.orphans {
            writeln!(out, " - {} ({})", orphan.name, orphan.version)?;
        }
        Ok(())
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TableFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut out = String::new();
        self.write_table(&mut out, &model.packages)
            .and_then(|_| self.write_orphans(&mut out, model))
            .map_err(|e| anyhow::anyhow!("Failed to render package table: {}", e))?;
        Ok(out)
    }
}
