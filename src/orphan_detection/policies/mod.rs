mod system_package_policy;

pub use system_package_policy::SystemPackagePolicy;
