use crate::orphan_detection::domain::DependencyTree;
use crate::shared::Result;

/// DependencyTreeReader port for the dependency-tree tool (pipdeptree)
pub trait DependencyTreeReader {
    /// Distribution name of the tool, used when it has to be installed
    fn tool_name(&self) -> &str;

    /// Returns true if the tool can be run in the target environment
    fn is_available(&self) -> bool;

    /// Reads "package requires package" edges for every installed distribution
    ///
    /// # Errors
    /// Returns an error if:
    /// - The tool cannot be executed or exits unsuccessfully
    /// - Its output cannot be parsed
    fn read_dependency_tree(&self) -> Result<DependencyTree>;
}
