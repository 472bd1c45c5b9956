use crate::reverse_deps::domain::Formula;

/// InstallState port: installation predicates supplied by the caller
///
/// Keeping this behind a trait lets the resolver run against fixed fixtures
/// in tests and against a real cellar in the CLI.
pub trait InstallState {
    /// The formula's current version is present
    fn is_installed(&self, formula: &Formula) -> bool;

    /// Some version of the formula has been installed, current or not
    fn any_version_installed(&self, formula: &Formula) -> bool;
}

impl<T: InstallState + ?Sized> InstallState for &T {
    fn is_installed(&self, formula: &Formula) -> bool {
        (**self).is_installed(formula)
    }

    fn any_version_installed(&self, formula: &Formula) -> bool {
        (**self).any_version_installed(formula)
    }
}
