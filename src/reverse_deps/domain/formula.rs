use super::{Dependency, Requirement};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use serde::Serialize;
use std::borrow::Borrow;

/// Maximum length for formula names (security limit)
const MAX_FORMULA_NAME_LENGTH: usize = 255;

/// Maximum length for formula versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for formula name with validation
///
/// Accepts plain names (`openssl@3`, `gtk+3`) and fully qualified tap names
/// (`user/tap/foo`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FormulaName(String);

impl FormulaName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(invalid_name(&name, "name cannot be empty"));
        }

        if name.len() > MAX_FORMULA_NAME_LENGTH {
            return Err(invalid_name(
                &name,
                &format!(
                    "name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_FORMULA_NAME_LENGTH
                ),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '+' | '/'))
        {
            return Err(invalid_name(
                &name,
                "only alphanumeric characters and '-', '_', '.', '@', '+', '/' are allowed",
            ));
        }

        let segments: Vec<&str> = name.split('/').collect();
        let malformed_segment = segments
            .iter()
            .any(|segment| segment.is_empty() || *segment == "." || *segment == "..");
        if malformed_segment || !matches!(segments.len(), 1 | 3) {
            return Err(invalid_name(&name, "tap-qualified names must look like user/tap/name"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name without its tap prefix (`user/tap/foo` -> `foo`)
    pub fn short_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

fn invalid_name(name: &str, reason: &str) -> anyhow::Error {
    RdepsError::InvalidFormulaName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

impl Borrow<str> for FormulaName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormulaName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for formula version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Result<Self> {
        let version = version.into();

        if version.is_empty() {
            anyhow::bail!("Formula version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Formula version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        // Versions become directory names inside the cellar
        if version == "." || version == ".." {
            anyhow::bail!("Formula version '{}' is not a valid keg name", version);
        }

        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'))
        {
            anyhow::bail!(
                "Formula version contains invalid characters. Only alphanumeric, dots, hyphens, plus and underscores are allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A formula as loaded from the index: its identity plus what it declares.
///
/// Formulae are immutable once the universe is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    name: FormulaName,
    version: Option<Version>,
    dependencies: Vec<Dependency>,
    requirements: Vec<Requirement>,
}

impl Formula {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: FormulaName::new(name)?,
            version: None,
            dependencies: Vec::new(),
            requirements: Vec::new(),
        })
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Result<Self> {
        self.version = Some(Version::new(version)?);
        Ok(self)
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    pub fn name(&self) -> &FormulaName {
        &self.name
    }

    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }

    /// Declared dependencies, in declaration order
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reverse_deps::domain::DependencyKind;

    #[test]
    fn test_formula_name_new_valid() {
        for name in ["foo", "openssl@3", "gtk+3", "python-setuptools", "user/tap/foo"] {
            let formula_name = FormulaName::new(name).unwrap();
            assert_eq!(formula_name.as_str(), name);
        }
    }

    #[test]
    fn test_formula_name_new_empty() {
        let result = FormulaName::new("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_formula_name_rejects_invalid_characters() {
        assert!(FormulaName::new("foo bar").is_err());
        assert!(FormulaName::new("foo;rm").is_err());
        assert!(FormulaName::new("../foo").is_err());
    }

    #[test]
    fn test_formula_name_rejects_malformed_tap_names() {
        assert!(FormulaName::new("/foo").is_err());
        assert!(FormulaName::new("user//foo").is_err());
        assert!(FormulaName::new("foo/").is_err());
        assert!(FormulaName::new("user/foo").is_err());
        assert!(FormulaName::new("user/./foo").is_err());
    }

    #[test]
    fn test_formula_name_short_name() {
        assert_eq!(FormulaName::new("user/tap/foo").unwrap().short_name(), "foo");
        assert_eq!(FormulaName::new("foo").unwrap().short_name(), "foo");
    }

    #[test]
    fn test_formula_name_too_long() {
        let result = FormulaName::new("a".repeat(MAX_FORMULA_NAME_LENGTH + 1));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_formula_name_ordering_is_lexicographic() {
        let mut names = vec![
            FormulaName::new("optional").unwrap(),
            FormulaName::new("bar").unwrap(),
        ];
        names.sort();
        assert_eq!(names[0].as_str(), "bar");
    }

    #[test]
    fn test_version_validation() {
        assert_eq!(Version::new("1.0").unwrap().as_str(), "1.0");
        assert_eq!(Version::new("3.4.1_2").unwrap().as_str(), "3.4.1_2");
        assert!(Version::new("").is_err());
        assert!(Version::new("..").is_err());
        assert!(Version::new("1.0/../../etc").is_err());
    }

    #[test]
    fn test_formula_builder() {
        let formula = Formula::new("optional")
            .unwrap()
            .with_version("1.0")
            .unwrap()
            .with_dependency(Dependency::new("bar", DependencyKind::Optional).unwrap())
            .with_requirement(Requirement::new("xcode", DependencyKind::Build));

        assert_eq!(formula.name().as_str(), "optional");
        assert_eq!(formula.version().map(Version::as_str), Some("1.0"));
        assert_eq!(formula.dependencies().len(), 1);
        assert_eq!(formula.dependencies()[0].kind(), DependencyKind::Optional);
        assert_eq!(formula.requirements()[0].name(), "xcode");
    }

    #[test]
    fn test_formula_without_version() {
        let formula = Formula::new("foo").unwrap();
        assert!(formula.version().is_none());
        assert!(formula.dependencies().is_empty());
    }
}
