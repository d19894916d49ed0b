//! Builder for constructing ReportReadModel from classified records

use super::report_read_model::{OrphanView, PackageView, ReportReadModel, ReportSummary};
use crate::orphan_detection::domain::{PackageCategory, PackageRecord};

/// Label shown for system packages
pub const SYSTEM_LABEL: &str = "system (do not remove)";

/// Label shown for application packages
pub const APPLICATION_LABEL: &str = "application";

/// Builder for constructing ReportReadModel from domain objects
pub struct ReportReadModelBuilder;

impl ReportReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `records` - Every classified package, in display order
    /// * `orphans` - The subset of records that are orphaned
    pub fn build(records: &[PackageRecord], orphans: &[PackageRecord]) -> ReportReadModel {
        let packages = records.iter().map(Self::build_package).collect();
        let orphans = orphans
            .iter()
            .map(|record| OrphanView {
                name: record.name().to_string(),
                version: record.version().to_string(),
            })
            .collect::<Vec<_>>();
        let summary = Self::build_summary(records, orphans.len());

        ReportReadModel {
            packages,
            orphans,
            summary,
        }
    }

    fn build_package(record: &PackageRecord) -> PackageView {
        let used_by: Vec<String> = record.used_by().iter().map(|n| n.to_string()).collect();

        PackageView {
            name: record.name().to_string(),
            version: record.version().to_string(),
            category: record.category().to_string(),
            used_by_label: Self::used_by_label(record.category(), &used_by),
            used_by,
            location: record.package().location().map(String::from),
        }
    }

    fn used_by_label(category: PackageCategory, used_by: &[String]) -> String {
        match category {
            PackageCategory::System => SYSTEM_LABEL.to_string(),
            PackageCategory::Required => format!("required by {}", used_by.join(", ")),
            PackageCategory::Application => APPLICATION_LABEL.to_string(),
        }
    }

    fn build_summary(records: &[PackageRecord], orphaned: usize) -> ReportSummary {
        let count = |category: PackageCategory| {
            records
                .iter()
                .filter(|r| r.category() == category)
                .count()
        };

        ReportSummary {
            total: records.len(),
            system: count(PackageCategory::System),
            required: count(PackageCategory::Required),
            application: count(PackageCategory::Application),
            orphaned,
        }
    }
}
