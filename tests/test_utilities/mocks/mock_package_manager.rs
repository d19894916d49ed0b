use pip_orphans::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PackageManager holding an in-memory environment
///
/// Clones share state, so a test can keep a handle after moving one
/// into a use case.
#[derive(Default, Clone)]
pub struct MockPackageManager {
    pub installed: Arc<Mutex<Vec<(String, String)>>>,
    pub installs: Arc<Mutex<Vec<String>>>,
    pub uninstalls: Arc<Mutex<Vec<String>>>,
    pub failing_uninstalls: Vec<String>,
    pub should_fail_list: bool,
    pub should_fail_install: bool,
}

impl MockPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(self, name: &str, version: &str) -> Self {
        self.installed
            .lock()
            .unwrap()
            .push((name.to_string(), version.to_string()));
        self
    }

    pub fn with_failing_uninstall(mut self, name: &str) -> Self {
        self.failing_uninstalls.push(name.to_string());
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.should_fail_list = true;
        self
    }

    pub fn with_install_failure(mut self) -> Self {
        self.should_fail_install = true;
        self
    }

    pub fn installed_names(&self) -> Vec<String> {
        self.installed
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn get_installs(&self) -> Vec<String> {
        self.installs.lock().unwrap().clone()
    }

    pub fn get_uninstalls(&self) -> Vec<String> {
        self.uninstalls.lock().unwrap().clone()
    }
}

impl PackageManager for MockPackageManager {
    fn list_installed(&self) -> Result<Vec<Package>> {
        if self.should_fail_list {
            anyhow::bail!("Mock pip list failure");
        }
        self.installed
            .lock()
            .unwrap()
            .iter()
            .map(|(name, version)| Package::new(name.clone(), version.clone()))
            .collect()
    }

    fn install(&self, name: &str) -> Result<()> {
        if self.should_fail_install {
            anyhow::bail!("Mock pip install failure for {}", name);
        }
        self.installs.lock().unwrap().push(name.to_string());
        Ok(())
    }

    fn uninstall(&self, name: &PackageName) -> Result<()> {
        self.uninstalls.lock().unwrap().push(name.to_string());
        if self.failing_uninstalls.iter().any(|f| name.matches(f)) {
            anyhow::bail!("Mock pip uninstall failure for {}", name);
        }
        self.installed
            .lock()
            .unwrap()
            .retain(|(installed, _)| !name.matches(installed));
        Ok(())
    }

    fn install_hint(&self, name: &str) -> String {
        format!("mock-python -m pip install {}", name)
    }
}
