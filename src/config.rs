//! Configuration file support for pip-orphans.
//!
//! Provides YAML-based configuration through `pip-orphans.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::python::DEFAULT_PYTHON;
use crate::application::dto::OutputFormat;
use crate::shared::error::CleanerError;
use crate::shared::security::read_small_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pip-orphans.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub python: Option<String>,
    pub format: Option<String>,
    pub auto_install: Option<bool>,
    pub confirm_each: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_small_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref python) = config.python {
        if python.trim().is_empty() {
            bail!(
                "Invalid config: python must not be empty.\n\n\
                 💡 Hint: Set 'python' to an interpreter name or path (e.g., \"python3\")."
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(message) = OutputFormat::from_str(format) {
            return Err(CleanerError::Validation {
                message: format!("Invalid config: {}", message),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None` / `false` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub python: Option<String>,
    pub format: Option<OutputFormat>,
    pub no_install: bool,
    pub list_only: bool,
}

/// Effective settings for one run.
///
/// Precedence: command line, then config file, then built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub python: String,
    pub format: OutputFormat,
    pub auto_install: bool,
    pub confirm_each: bool,
    pub list_only: bool,
}

impl Settings {
    pub fn resolve(cli: CliOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let config_format = config
            .format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|message| CleanerError::Validation { message })?;

        Ok(Self {
            python: cli
                .python
                .or(config.python)
                .unwrap_or_else(|| DEFAULT_PYTHON.to_string()),
            format: cli.format.or(config_format).unwrap_or_default(),
            auto_install: !cli.no_install && config.auto_install.unwrap_or(true),
            confirm_each: config.confirm_each.unwrap_or(true),
            list_only: cli.list_only,
        })
    }
}
