//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for the formatters.

pub mod report_read_model;
pub mod report_read_model_builder;

pub use report_read_model::{OrphanView, PackageView, ReportReadModel, ReportSummary};
pub use report_read_model_builder::ReportReadModelBuilder;
