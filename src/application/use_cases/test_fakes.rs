//! In-crate fakes for use case tests

use crate::orphan_detection::domain::{DependencyTree, Package, PackageName};
use crate::ports::outbound::{DependencyTreeReader, PackageManager, ProgressReporter, Prompter};
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

#[derive(Default)]
struct FakeState {
    packages: Vec<Package>,
    edges: Vec<(String, String)>,
    tool_installed: bool,
    install_fails: bool,
    install_is_noop: bool,
    list_fails: bool,
    uninstall_failures: HashSet<String>,
    installs: Vec<String>,
    uninstalls: Vec<String>,
}

/// Fake Python environment; clones share state so one instance can serve
/// as both PackageManager and DependencyTreeReader
#[derive(Clone, Default)]
pub struct FakeEnvironment {
    state: Rc<RefCell<FakeState>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        let env = Self::default();
        env.state.borrow_mut().tool_installed = true;
        env
    }

    pub fn with_package(self, name: &str, version: &str) -> Self {
        self.state
            .borrow_mut()
            .packages
            .push(Package::new(name.to_string(), version.to_string()).unwrap());
        self
    }

    pub fn with_dependency(self, parent: &str, child: &str) -> Self {
        self.state
            .borrow_mut()
            .edges
            .push((parent.to_string(), child.to_string()));
        self
    }

    pub fn without_tool(self) -> Self {
        self.state.borrow_mut().tool_installed = false;
        self
    }

    pub fn with_failing_install(self) -> Self {
        self.state.borrow_mut().install_fails = true;
        self
    }

    pub fn with_noop_install(self) -> Self {
        self.state.borrow_mut().install_is_noop = true;
        self
    }

    pub fn with_failing_list(self) -> Self {
        self.state.borrow_mut().list_fails = true;
        self
    }

    pub fn with_failing_uninstall(self, name: &str) -> Self {
        self.state
            .borrow_mut()
            .uninstall_failures
            .insert(name.to_string());
        self
    }

    pub fn installed_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .packages
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn installs(&self) -> Vec<String> {
        self.state.borrow().installs.clone()
    }

    pub fn uninstalls(&self) -> Vec<String> {
        self.state.borrow().uninstalls.clone()
    }
}

impl PackageManager for FakeEnvironment {
    fn list_installed(&self) -> Result<Vec<Package>> {
        let state = self.state.borrow();
        if state.list_fails {
            anyhow::bail!("Fake pip list failure");
        }
        Ok(state.packages.clone())
    }

    fn install(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.installs.push(name.to_string());
        if state.install_fails {
            anyhow::bail!("Fake pip install failure");
        }
        if !state.install_is_noop {
            state.tool_installed = true;
        }
        Ok(())
    }

    fn uninstall(&self, name: &PackageName) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.uninstalls.push(name.to_string());
        if state.uninstall_failures.contains(name.as_str()) {
            anyhow::bail!("Fake pip uninstall failure");
        }
        state.packages.retain(|p| !name.matches(p.name()));
        Ok(())
    }

    fn install_hint(&self, name: &str) -> String {
        format!("fake -m pip install {}", name)
    }
}

impl DependencyTreeReader for FakeEnvironment {
    fn tool_name(&self) -> &str {
        "pipdeptree"
    }

    fn is_available(&self) -> bool {
        self.state.borrow().tool_installed
    }

    fn read_dependency_tree(&self) -> Result<DependencyTree> {
        let mut tree = DependencyTree::new();
        for (parent, child) in &self.state.borrow().edges {
            tree.add_dependency(
                &PackageName::new(parent.clone())?,
                PackageName::new(child.clone())?,
            );
        }
        Ok(tree)
    }
}

/// Prompter answering from a script and recording everything shown
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Rc<RefCell<VecDeque<String>>>,
    questions: Rc<RefCell<Vec<String>>>,
    lines: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        let prompter = Self::default();
        prompter
            .answers
            .borrow_mut()
            .extend(answers.iter().map(|a| a.to_string()));
        prompter
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> Result<Option<String>> {
        self.questions.borrow_mut().push(question.to_string());
        Ok(self.answers.borrow_mut().pop_front())
    }

    fn say(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

/// ProgressReporter that captures messages
#[derive(Clone, Default)]
pub struct RecordingReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn start_spinner(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Spinner: {}", message));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}
