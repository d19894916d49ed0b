use super::pip_output::{parse_pip_list, parse_pipdeptree};
use crate::orphan_detection::domain::{DependencyTree, Package, PackageName};
use crate::ports::outbound::{DependencyTreeReader, PackageManager};
use crate::shared::error::CleanerError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Interpreter used when none is configured
pub const DEFAULT_PYTHON: &str = "python3";

/// Distribution name of the dependency tree tool
const DEPENDENCY_TREE_TOOL: &str = "pipdeptree";

/// PipClient adapter running `<python> -m pip` and `<python> -m pipdeptree`
///
/// Implements both the PackageManager and DependencyTreeReader ports.
/// Every command runs as `<python> -m ...` against the same interpreter.
#[derive(Debug, Clone)]
pub struct PipClient {
    python: String,
}

impl PipClient {
    /// Creates a client for the given interpreter
    ///
    /// A bare command name (`python3`) is resolved through `PATH` when run.
    /// Anything containing a path separator must point at an existing file.
    ///
    /// # Errors
    /// Returns `CleanerError::InvalidInterpreter` for an empty name or a
    /// path that does not refer to a file
    pub fn new(python: impl Into<String>) -> Result<Self> {
        let python = python.into();
        Self::validate_interpreter(&python)?;
        Ok(Self { python })
    }

    fn validate_interpreter(python: &str) -> Result<()> {
        if python.trim().is_empty() {
            return Err(CleanerError::InvalidInterpreter {
                path: PathBuf::from(python),
                reason: "Interpreter name is empty".to_string(),
            }
            .into());
        }

        let is_path = python.contains(std::path::MAIN_SEPARATOR) || python.contains('/');
        if !is_path {
            return Ok(());
        }

        let path = Path::new(python);
        let metadata = fs::metadata(path).map_err(|e| CleanerError::InvalidInterpreter {
            path: path.to_path_buf(),
            reason: format!("Failed to read interpreter metadata: {}", e),
        })?;

        if !metadata.is_file() {
            return Err(CleanerError::InvalidInterpreter {
                path: path.to_path_buf(),
                reason: "Not a file".to_string(),
            }
            .into());
        }

        Ok(())
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.python, args.join(" "))
    }

    /// Runs `<python> <args>` and captures its output
    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(&self.python)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to execute `{}`", self.describe(args)))
    }

    /// Runs a command and fails with `CommandFailed` on a non-zero exit
    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CleanerError::CommandFailed {
                command: self.describe(args),
                details: format!("{}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("Output of `{}` was not valid UTF-8", self.describe(args)))
    }
}

impl PackageManager for PipClient {
    fn list_installed(&self) -> Result<Vec<Package>> {
        let stdout = self.run_checked(&[
            "-m",
            "pip",
            "list",
            "--format=json",
            "--verbose",
            "--disable-pip-version-check",
        ])?;
        parse_pip_list(&stdout)
    }

    fn install(&self, name: &str) -> Result<()> {
        self.run_checked(&["-m", "pip", "install", "--disable-pip-version-check", name])?;
        Ok(())
    }

    fn uninstall(&self, name: &PackageName) -> Result<()> {
        self.run_checked(&["-m", "pip", "uninstall", "-y", name.as_str()])?;
        Ok(())
    }

    fn install_hint(&self, name: &str) -> String {
        format!("{} -m pip install {}", self.python, name)
    }
}

impl DependencyTreeReader for PipClient {
    fn tool_name(&self) -> &str {
        DEPENDENCY_TREE_TOOL
    }

    fn is_available(&self) -> bool {
        self.run(&["-m", DEPENDENCY_TREE_TOOL, "--version"])
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn read_dependency_tree(&self) -> Result<DependencyTree> {
        let stdout = self.run_checked(&["-m", DEPENDENCY_TREE_TOOL, "--json"])?;
        parse_pipdeptree(&stdout)
    }
}
