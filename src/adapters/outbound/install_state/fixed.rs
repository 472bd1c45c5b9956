use crate::ports::outbound::InstallState;
use crate::reverse_deps::domain::Formula;
use std::collections::HashSet;

/// FixedInstallState adapter: installation state from in-memory name sets
///
/// Used when no cellar is configured (nothing is installed) and by library
/// callers that already know what is installed. Tap-qualified formulae are
/// looked up by their short name, as a cellar stores them.
#[derive(Debug, Clone, Default)]
pub struct FixedInstallState {
    installed: HashSet<String>,
    previously_installed: HashSet<String>,
}

impl FixedInstallState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a formula's current version as installed
    pub fn with_installed(mut self, name: impl Into<String>) -> Self {
        self.installed.insert(name.into());
        self
    }

    /// Marks a formula as having an older keg only
    pub fn with_previous_install(mut self, name: impl Into<String>) -> Self {
        self.previously_installed.insert(name.into());
        self
    }
}

impl InstallState for FixedInstallState {
    fn is_installed(&self, formula: &Formula) -> bool {
        self.installed.contains(formula.name().short_name())
    }

    fn any_version_installed(&self, formula: &Formula) -> bool {
        let name = formula.name().short_name();
        self.installed.contains(name) || self.previously_installed.contains(name)
    }
}
