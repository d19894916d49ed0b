pub mod dependency_tree;
pub mod package;
pub mod package_record;

pub use dependency_tree::DependencyTree;
pub use package::{normalize_name, Package, PackageName, Version};
pub use package_record::{PackageCategory, PackageRecord};
