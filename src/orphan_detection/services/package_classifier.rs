use crate::orphan_detection::domain::{
    DependencyTree, Package, PackageCategory, PackageName, PackageRecord,
};
use crate::orphan_detection::policies::SystemPackagePolicy;
use std::collections::HashSet;

/// PackageClassifier service assigning every installed package to exactly one category
///
/// Precedence: system policy first, then "required by another installed
/// package", otherwise application. Pure logic, no I/O.
pub struct PackageClassifier;

impl PackageClassifier {
    /// Classifies installed packages against the dependency tree
    ///
    /// # Arguments
    /// * `packages` - Installed packages in package manager order
    /// * `tree` - Dependency edges between installed packages
    ///
    /// # Returns
    /// One record per package, in the same order
    pub fn classify(packages: Vec<Package>, tree: &DependencyTree) -> Vec<PackageRecord> {
        let installed: HashSet<String> = packages
            .iter()
            .map(|p| p.package_name().normalized())
            .collect();

        packages
            .into_iter()
            .map(|package| {
                let used_by = Self::installed_dependents(package.package_name(), tree, &installed);
                let category = Self::category_for(&package, &used_by);
                PackageRecord::new(package, used_by, category)
            })
            .collect()
    }

    fn installed_dependents(
        name: &PackageName,
        tree: &DependencyTree,
        installed: &HashSet<String>,
    ) -> Vec<PackageName> {
        tree.dependents_of(name)
            .into_iter()
            .filter(|parent| installed.contains(&parent.normalized()))
            .collect()
    }

    fn category_for(package: &Package, used_by: &[PackageName]) -> PackageCategory {
        if SystemPackagePolicy::is_system(package) {
            PackageCategory::System
        } else if !used_by.is_empty() {
            PackageCategory::Required
        } else {
            PackageCategory::Application
        }
    }
}
