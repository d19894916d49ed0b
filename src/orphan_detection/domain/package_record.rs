use super::{Package, PackageName};
use std::fmt;

/// Bucket a package falls into after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageCategory {
    /// Tooling that ships with the interpreter or this tool itself; never removed
    System,
    /// Another installed package depends on it
    Required,
    /// Installed directly by the user
    Application,
}

impl PackageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageCategory::System => "system",
            PackageCategory::Required => "required",
            PackageCategory::Application => "application",
        }
    }
}

impl fmt::Display for PackageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified package: what is installed, who uses it, and its category
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    package: Package,
    used_by: Vec<PackageName>,
    category: PackageCategory,
}

impl PackageRecord {
    pub fn new(package: Package, used_by: Vec<PackageName>, category: PackageCategory) -> Self {
        Self {
            package,
            used_by,
            category,
        }
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        self.package.name()
    }

    pub fn package_name(&self) -> &PackageName {
        self.package.package_name()
    }

    pub fn version(&self) -> &str {
        self.package.version()
    }

    pub fn used_by(&self) -> &[PackageName] {
        &self.used_by
    }

    pub fn category(&self) -> PackageCategory {
        self.category
    }
}
