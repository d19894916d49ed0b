use crate::orphan_detection::domain::{DependencyTree, Package, PackageName};
use crate::shared::error::CleanerError;
use crate::shared::Result;
use serde::Deserialize;

/// One entry of `pip list --format=json --verbose`
#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
    #[serde(default)]
    location: Option<String>,
    /// Older pip releases capitalize this key
    #[serde(default, rename = "Location")]
    legacy_location: Option<String>,
}

/// One entry of `pipdeptree --json`
#[derive(Debug, Deserialize)]
struct PipdeptreeEntry {
    package: PipdeptreeNode,
    #[serde(default)]
    dependencies: Vec<PipdeptreeNode>,
}

#[derive(Debug, Deserialize)]
struct PipdeptreeNode {
    #[serde(default)]
    package_name: Option<String>,
    #[serde(default)]
    key: Option<String>,
}

impl PipdeptreeNode {
    fn into_name(self) -> Result<PackageName> {
        let raw = self
            .package_name
            .or(self.key)
            .ok_or_else(|| CleanerError::OutputParseError {
                source_name: "pipdeptree --json".to_string(),
                details: "entry has neither 'package_name' nor 'key'".to_string(),
            })?;
        PackageName::new(raw)
    }
}

/// Parses the JSON printed by `pip list --format=json --verbose`
///
/// # Errors
/// Returns an error if the JSON is malformed or an entry has an invalid name or version
pub fn parse_pip_list(json: &str) -> Result<Vec<Package>> {
    let entries: Vec<PipListEntry> =
        serde_json::from_str(json).map_err(|e| CleanerError::OutputParseError {
            source_name: "pip list --format=json".to_string(),
            details: e.to_string(),
        })?;

    entries
        .into_iter()
        .map(|entry| -> Result<Package> {
            let location = entry.location.or(entry.legacy_location);
            Ok(Package::new(entry.name, entry.version)?.with_location(location))
        })
        .collect()
}

/// Parses the JSON printed by `pipdeptree --json` into a dependency tree
///
/// # Errors
/// Returns an error if the JSON is malformed or a package name is invalid
pub fn parse_pipdeptree(json: &str) -> Result<DependencyTree> {
    let entries: Vec<PipdeptreeEntry> =
        serde_json::from_str(json).map_err(|e| CleanerError::OutputParseError {
            source_name: "pipdeptree --json".to_string(),
            details: e.to_string(),
        })?;

    let mut tree = DependencyTree::new();
    for entry in entries {
        let parent = entry.package.into_name()?;
        for dependency in entry.dependencies {
            tree.add_dependency(&parent, dependency.into_name()?);
        }
    }
    Ok(tree)
}
