/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (subprocesses, console, etc.).
pub mod dependency_tree_reader;
pub mod formatter;
pub mod output_presenter;
pub mod package_manager;
pub mod progress_reporter;
pub mod prompter;

pub use dependency_tree_reader::DependencyTreeReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use package_manager::PackageManager;
pub use progress_reporter::ProgressReporter;
pub use prompter::Prompter;
