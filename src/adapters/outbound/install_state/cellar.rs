use crate::ports::outbound::InstallState;
use crate::reverse_deps::domain::Formula;
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Install receipt written into every keg on installation
pub const TAB_FILENAME: &str = "INSTALL_RECEIPT.json";

/// CellarInstallState adapter reading installation state from a cellar
///
/// Layout: `<cellar>/<formula>/<version>/` is one keg, and a keg that holds
/// an install receipt counts as installed. Tap-qualified formulae live under
/// their short name.
#[derive(Debug, Clone)]
pub struct CellarInstallState {
    cellar: PathBuf,
}

impl CellarInstallState {
    /// Creates the adapter. A cellar that does not exist yet is valid and
    /// simply has nothing installed; anything else that is not a directory
    /// is rejected.
    pub fn new(cellar: impl Into<PathBuf>) -> Result<Self> {
        let cellar = cellar.into();

        if cellar.exists() && !cellar.is_dir() {
            return Err(RdepsError::InvalidCellarPath {
                path: cellar,
                reason: "Not a directory".to_string(),
            }
            .into());
        }

        Ok(Self { cellar })
    }

    pub fn cellar(&self) -> &Path {
        &self.cellar
    }

    fn rack(&self, formula: &Formula) -> PathBuf {
        self.cellar.join(formula.name().short_name())
    }

    /// Version directories of a formula; unreadable racks count as empty
    fn kegs(&self, formula: &Formula) -> Vec<PathBuf> {
        let rack = self.rack(formula);
        let entries = match fs::read_dir(&rack) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::trace!(rack = %rack.display(), error = %e, "no rack");
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect()
    }

    fn has_tab(keg: &Path) -> bool {
        keg.join(TAB_FILENAME).is_file()
    }
}

impl InstallState for CellarInstallState {
    fn is_installed(&self, formula: &Formula) -> bool {
        match formula.version() {
            Some(version) => Self::has_tab(&self.rack(formula).join(version.as_str())),
            None => self.any_version_installed(formula),
        }
    }

    fn any_version_installed(&self, formula: &Formula) -> bool {
        self.kegs(formula).iter().any(|keg| Self::has_tab(keg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn install_keg(cellar: &Path, name: &str, version: &str) {
        let keg = cellar.join(name).join(version);
        fs::create_dir_all(&keg).unwrap();
        fs::write(keg.join(TAB_FILENAME), "{}").unwrap();
    }

    #[test]
    fn test_any_version_installed_with_tab() {
        let cellar = TempDir::new().unwrap();
        install_keg(cellar.path(), "foo", "1.0");

        let state = CellarInstallState::new(cellar.path()).unwrap();
        let foo = Formula::new("foo").unwrap();
        let bar = Formula::new("bar").unwrap();

        assert!(state.any_version_installed(&foo));
        assert!(!state.any_version_installed(&bar));
    }

    #[test]
    fn test_keg_without_tab_is_not_installed() {
        let cellar = TempDir::new().unwrap();
        fs::create_dir_all(cellar.path().join("foo").join("1.0")).unwrap();

        let state = CellarInstallState::new(cellar.path()).unwrap();
        let foo = Formula::new("foo").unwrap().with_version("1.0").unwrap();

        assert!(!state.any_version_installed(&foo));
        assert!(!state.is_installed(&foo));
    }

    #[test]
    fn test_is_installed_requires_current_version() {
        let cellar = TempDir::new().unwrap();
        install_keg(cellar.path(), "foo", "1.0");

        let state = CellarInstallState::new(cellar.path()).unwrap();
        let current = Formula::new("foo").unwrap().with_version("1.0").unwrap();
        let outdated = Formula::new("foo").unwrap().with_version("2.0").unwrap();

        assert!(state.is_installed(&current));
        assert!(!state.is_installed(&outdated));
        assert!(state.any_version_installed(&outdated));
    }

    #[test]
    fn test_is_installed_without_version_falls_back_to_any_keg() {
        let cellar = TempDir::new().unwrap();
        install_keg(cellar.path(), "foo", "0.9");

        let state = CellarInstallState::new(cellar.path()).unwrap();
        assert!(state.is_installed(&Formula::new("foo").unwrap()));
    }

    #[test]
    fn test_tap_formula_uses_short_name() {
        let cellar = TempDir::new().unwrap();
        install_keg(cellar.path(), "foo", "1.0");

        let state = CellarInstallState::new(cellar.path()).unwrap();
        assert!(state.any_version_installed(&Formula::new("user/tap/foo").unwrap()));
    }

    #[test]
    fn test_missing_cellar_means_nothing_installed() {
        let state = CellarInstallState::new("/nonexistent/Cellar").unwrap();
        assert!(!state.any_version_installed(&Formula::new("foo").unwrap()));
    }

    #[test]
    fn test_cellar_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Cellar");
        fs::write(&file, "").unwrap();

        let result = CellarInstallState::new(&file);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid cellar path"));
    }
}
