use crate::orphan_detection::domain::Package;

/// Distributions that are always treated as system tooling
///
/// `pipdeptree` is listed because this tool installs it on demand.
pub const SYSTEM_PACKAGES: &[&str] = &["pip", "setuptools", "wheel", "pipdeptree"];

/// Install locations owned by the operating system or a vendor toolchain
pub const SYSTEM_LOCATION_PREFIXES: &[&str] = &["/Library/", "/System/", "/Applications/Xcode.app/"];

/// SystemPackagePolicy decides which packages must never be offered for removal
///
/// A package is a system package if:
/// 1. its normalized name is in [`SYSTEM_PACKAGES`], or
/// 2. it is installed under one of [`SYSTEM_LOCATION_PREFIXES`]
///
/// The lists are fixed and not configurable.
pub struct SystemPackagePolicy;

impl SystemPackagePolicy {
    pub fn is_system(package: &Package) -> bool {
        Self::is_system_name(package) || Self::is_system_location(package)
    }

    fn is_system_name(package: &Package) -> bool {
        SYSTEM_PACKAGES
            .iter()
            .any(|name| package.package_name().matches(name))
    }

    fn is_system_location(package: &Package) -> bool {
        package.location().is_some_and(|location| {
            SYSTEM_LOCATION_PREFIXES
                .iter()
                .any(|prefix| location.starts_with(prefix))
        })
    }
}
