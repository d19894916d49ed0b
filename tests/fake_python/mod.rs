//! A shell script standing in for `python -m pip` / `python -m pipdeptree`
#![allow(dead_code)]
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const PIP_LIST_JSON: &str = r#"[
  {"name": "pip", "version": "24.0", "location": "/venv/lib/python3.11/site-packages"},
  {"name": "requests", "version": "2.31.0", "location": "/venv/lib/python3.11/site-packages"},
  {"name": "urllib3", "version": "2.0.7", "location": "/venv/lib/python3.11/site-packages"},
  {"name": "black", "version": "24.2.0", "location": "/venv/lib/python3.11/site-packages"}
]"#;

const PIPDEPTREE_JSON: &str = r#"[
  {"package": {"key": "pip", "package_name": "pip", "installed_version": "24.0"}, "dependencies": []},
  {"package": {"key": "requests", "package_name": "requests", "installed_version": "2.31.0"},
   "dependencies": [{"key": "urllib3", "package_name": "urllib3", "installed_version": "2.0.7"}]},
  {"package": {"key": "urllib3", "package_name": "urllib3", "installed_version": "2.0.7"}, "dependencies": []},
  {"package": {"key": "black", "package_name": "black", "installed_version": "24.2.0"}, "dependencies": []}
]"#;

/// Fake interpreter inside a directory; uninstalled names are appended to `uninstall.log`
pub struct FakePython {
    pub interpreter: PathBuf,
    pub uninstall_log: PathBuf,
}

impl FakePython {
    /// Environment: pip, requests -> urllib3, and the orphan black
    pub fn create(dir: &Path) -> Self {
        Self::create_with_tool(dir, true)
    }

    /// Same environment, with pipdeptree missing when `tool_available` is false
    pub fn create_with_tool(dir: &Path, tool_available: bool) -> Self {
        let interpreter = dir.join("fake-python");
        let uninstall_log = dir.join("uninstall.log");
        let tool_status = if tool_available { 0 } else { 1 };

        let script = format!(
            r#"#!/bin/sh
case "$2 $3" in
  "pipdeptree --version")
    exit {tool_status} ;;
  "pipdeptree --json")
    cat <<'JSON'
{PIPDEPTREE_JSON}
JSON
    ;;
  "pip list")
    cat <<'JSON'
{PIP_LIST_JSON}
JSON
    ;;
  "pip uninstall")
    echo "$5" >> "{log}" ;;
  "pip install")
    exit 1 ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 1 ;;
esac
"#,
            log = uninstall_log.display(),
        );

        fs::write(&interpreter, script).unwrap();
        fs::set_permissions(&interpreter, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            interpreter,
            uninstall_log,
        }
    }

    pub fn path_str(&self) -> &str {
        self.interpreter.to_str().unwrap()
    }

    /// Names passed to `pip uninstall`, in order
    pub fn uninstalled(&self) -> Vec<String> {
        fs::read_to_string(&self.uninstall_log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
