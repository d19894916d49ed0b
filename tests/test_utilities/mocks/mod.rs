/// Mock implementations for testing
mod mock_dependency_tree_reader;
mod mock_package_manager;
mod mock_progress_reporter;
mod mock_prompter;

pub use mock_dependency_tree_reader::MockDependencyTreeReader;
pub use mock_package_manager::MockPackageManager;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_prompter::MockPrompter;
