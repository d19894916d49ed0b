mod orphan_detector;
mod package_classifier;

pub use orphan_detector::OrphanDetector;
pub use package_classifier::PackageClassifier;
