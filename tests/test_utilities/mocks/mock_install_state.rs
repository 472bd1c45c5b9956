use rdeps::prelude::*;
use std::collections::HashSet;

/// Mock InstallState that also records which formulae were asked about
#[derive(Default)]
pub struct MockInstallState {
    installed: HashSet<String>,
    previously_installed: HashSet<String>,
    pub queried: std::sync::Mutex<Vec<String>>,
}

impl MockInstallState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(mut self, name: &str) -> Self {
        self.installed.insert(name.to_string());
        self
    }

    pub fn with_previous_install(mut self, name: &str) -> Self {
        self.previously_installed.insert(name.to_string());
        self
    }

    pub fn query_count(&self) -> usize {
        self.queried.lock().unwrap().len()
    }

    fn record(&self, formula: &Formula) {
        self.queried
            .lock()
            .unwrap()
            .push(formula.name().to_string());
    }
}

impl InstallState for MockInstallState {
    fn is_installed(&self, formula: &Formula) -> bool {
        self.record(formula);
        self.installed.contains(formula.name().as_str())
    }

    fn any_version_installed(&self, formula: &Formula) -> bool {
        self.record(formula);
        let name = formula.name().as_str();
        self.installed.contains(name) || self.previously_installed.contains(name)
    }
}
