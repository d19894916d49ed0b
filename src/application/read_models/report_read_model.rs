//! Report read model
//!
//! Flattened, presentation-ready view of a scan, shared by every formatter.

use serde::Serialize;

/// View representation of one installed package
#[derive(Debug, Clone, Serialize)]
pub struct PackageView {
    pub name: String,
    pub version: String,
    /// `system`, `required` or `application`
    pub category: String,
    pub used_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Text for the "Used By" column of the console table
    #[serde(skip)]
    pub used_by_label: String,
}

/// View representation of a package that is safe to remove
#[derive(Debug, Clone, Serialize)]
pub struct OrphanView {
    pub name: String,
    pub version: String,
}

/// Per-category counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub system: usize,
    pub required: usize,
    pub application: usize,
    pub orphaned: usize,
}

/// Complete report for one scan
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub packages: Vec<PackageView>,
    pub orphans: Vec<OrphanView>,
    pub summary: ReportSummary,
}
