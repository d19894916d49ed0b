//! pip-orphans - orphaned package cleaner for Python environments
//!
//! This library lists the distributions installed in a Python environment,
//! classifies them as system, required or application packages, detects the
//! orphaned ones (application packages nothing else depends on) and removes
//! them interactively, following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`orphan_detection`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pip_orphans::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let pip = PipClient::new("python3")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ScanEnvironmentUseCase::new(pip.clone(), pip, progress_reporter);
//!
//! // Execute
//! let response = use_case.execute(ScanRequest::default())?;
//!
//! // Format output
//! let model = ReportReadModelBuilder::build(&response.records, &response.orphans);
//! let output = TableFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod orphan_detection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        StderrProgressReporter, StdinPrompter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
    pub use crate::adapters::outbound::python::PipClient;
    pub use crate::application::dto::{
        OutputFormat, ScanRequest, ScanResponse, UninstallReport, UninstallRequest,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::{
        InteractiveUninstallUseCase, ScanEnvironmentUseCase,
    };
    pub use crate::orphan_detection::domain::{
        DependencyTree, Package, PackageCategory, PackageName, PackageRecord,
    };
    pub use crate::orphan_detection::policies::SystemPackagePolicy;
    pub use crate::orphan_detection::services::{OrphanDetector, PackageClassifier};
    pub use crate::ports::outbound::{
        DependencyTreeReader, OutputPresenter, PackageManager, ProgressReporter, Prompter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
