use super::MockPackageManager;
use pip_orphans::prelude::*;

/// Mock DependencyTreeReader returning fixed edges
pub struct MockDependencyTreeReader {
    pub edges: Vec<(String, String)>,
    pub available: bool,
    /// When set, the tool becomes available once this manager has installed it
    pub installed_by: Option<MockPackageManager>,
}

impl MockDependencyTreeReader {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            available: true,
            installed_by: None,
        }
    }

    pub fn with_dependency(mut self, parent: &str, child: &str) -> Self {
        self.edges.push((parent.to_string(), child.to_string()));
        self
    }

    /// The tool is missing until `package_manager` installs it
    pub fn missing(mut self, package_manager: Option<MockPackageManager>) -> Self {
        self.available = false;
        self.installed_by = package_manager;
        self
    }
}

impl DependencyTreeReader for MockDependencyTreeReader {
    fn tool_name(&self) -> &str {
        "pipdeptree"
    }

    fn is_available(&self) -> bool {
        self.available
            || self
                .installed_by
                .as_ref()
                .is_some_and(|pm| pm.get_installs().iter().any(|n| n == "pipdeptree"))
    }

    fn read_dependency_tree(&self) -> Result<DependencyTree> {
        let mut tree = DependencyTree::new();
        for (parent, child) in &self.edges {
            tree.add_dependency(
                &PackageName::new(parent.clone())?,
                PackageName::new(child.clone())?,
            );
        }
        Ok(tree)
    }
}
