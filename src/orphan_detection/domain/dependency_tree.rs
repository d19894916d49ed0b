use super::PackageName;
use std::collections::{BTreeMap, HashMap};

/// DependencyTree aggregate holding "parent requires child" edges
///
/// Edges are stored as a reverse index keyed by normalized package name so
/// that spellings coming from different tools (`pip list` vs `pipdeptree`)
/// line up.
#[derive(Debug, Clone, Default)]
pub struct DependencyTree {
    dependents: HashMap<String, BTreeMap<String, PackageName>>,
}

impl DependencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `parent` requires `child`. Self-references are ignored.
    pub fn add_dependency(&mut self, parent: &PackageName, child: PackageName) {
        let parent_key = parent.normalized();
        let child_key = child.normalized();
        if parent_key == child_key {
            return;
        }

        self.dependents
            .entry(child_key)
            .or_default()
            .entry(parent_key)
            .or_insert_with(|| parent.clone());
    }

    /// Packages that require `name`, ordered by normalized name
    pub fn dependents_of(&self, name: &PackageName) -> Vec<PackageName> {
        self.dependents
            .get(&name.normalized())
            .map(|parents| parents.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_required(&self, name: &PackageName) -> bool {
        self.dependents
            .get(&name.normalized())
            .is_some_and(|parents| !parents.is_empty())
    }
}
