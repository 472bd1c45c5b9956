use crate::ports::outbound::FormulaRepository;
use crate::reverse_deps::domain::{Dependency, DependencyKind, Formula, Requirement};
use crate::shared::error::RdepsError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up when the source is a directory
pub const FORMULA_INDEX_FILENAME: &str = "formulae.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormulaIndex {
    #[serde(default)]
    formula: Vec<IndexFormula>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexFormula {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: Vec<IndexEdge>,
    #[serde(default)]
    requirements: Vec<IndexEdge>,
}

/// Either `"foo"` or `{ name = "foo", kind = "build", tags = [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IndexEdge {
    Name(String),
    Detailed(DetailedEdge),
}

/// Kept apart from `IndexEdge` since untagged variants ignore `deny_unknown_fields`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedEdge {
    name: String,
    #[serde(default)]
    kind: Option<DependencyKind>,
    #[serde(default)]
    tags: Vec<String>,
}

impl IndexEdge {
    /// Name, kind and tags. Without an explicit kind the tags decide,
    /// and without a kind tag the edge is required.
    fn into_parts(self) -> (String, DependencyKind, Vec<String>) {
        match self {
            IndexEdge::Name(name) => (name, DependencyKind::Required, Vec::new()),
            IndexEdge::Detailed(DetailedEdge { name, kind, tags }) => {
                let kind = kind
                    .or_else(|| DependencyKind::from_tags(&tags))
                    .unwrap_or_default();
                (name, kind, tags)
            }
        }
    }
}

/// FileSystemReader adapter loading formulae from a TOML index
///
/// The index is a list of `[[formula]]` tables; this adapter is the only
/// place that knows about that layout.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Accepts the index file itself or a directory holding `formulae.toml`
    fn index_path(source: &Path) -> PathBuf {
        if source.is_dir() {
            source.join(FORMULA_INDEX_FILENAME)
        } else {
            source.to_path_buf()
        }
    }

    /// Parses index content into formulae, in file order
    pub fn parse_index(content: &str, path: &Path) -> Result<Vec<Formula>> {
        let index: FormulaIndex =
            toml::from_str(content).map_err(|e| RdepsError::FormulaIndexParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        index
            .formula
            .into_iter()
            .map(Self::build_formula)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Invalid formula in index {}", path.display()))
    }

    fn build_formula(raw: IndexFormula) -> Result<Formula> {
        let mut formula = Formula::new(raw.name.clone())?;
        if let Some(version) = raw.version {
            formula = formula
                .with_version(version)
                .with_context(|| format!("Formula '{}' has an invalid version", raw.name))?;
        }

        for edge in raw.dependencies {
            let (name, kind, tags) = edge.into_parts();
            let dependency = Dependency::new(name, kind)
                .with_context(|| format!("Formula '{}' declares an invalid dependency", raw.name))?
                .with_tags(tags);
            formula = formula.with_dependency(dependency);
        }

        for edge in raw.requirements {
            let (name, kind, _) = edge.into_parts();
            formula = formula.with_requirement(Requirement::new(name, kind));
        }

        Ok(formula)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FormulaRepository for FileSystemReader {
    fn load_formulae(&self, source: &Path) -> Result<Vec<Formula>> {
        let index_path = Self::index_path(source);

        if !index_path.exists() {
            return Err(RdepsError::FormulaIndexNotFound {
                path: index_path,
                suggestion: format!(
                    "Pass the index with --formulae, set RDEPS_FORMULAE, or put a {} in the current directory",
                    FORMULA_INDEX_FILENAME
                ),
            }
            .into());
        }

        let content = read_regular_file(&index_path, "formula index")?;
        let formulae = Self::parse_index(&content, &index_path)?;

        tracing::debug!(
            path = %index_path.display(),
            formulae = formulae.len(),
            "loaded formula index"
        );

        Ok(formulae)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const INDEX: &str = r#"
[[formula]]
name = "foo"
version = "1.0"

[[formula]]
name = "bar"
version = "1.0"
dependencies = ["foo"]

[[formula]]
name = "optional"
dependencies = [
    { name = "bar", kind = "optional" },
    { name = "pkg-config", tags = ["build"] },
    { name = "zlib", tags = ["universal"] },
]
requirements = [
    { name = "xcode", kind = "build" },
]
"#;

    #[test]
    fn test_parse_index() {
        let formulae = FileSystemReader::parse_index(INDEX, Path::new("formulae.toml")).unwrap();

        assert_eq!(formulae.len(), 3);
        assert_eq!(formulae[0].name().as_str(), "foo");
        assert_eq!(formulae[0].version().unwrap().as_str(), "1.0");

        let bar_deps = formulae[1].dependencies();
        assert_eq!(bar_deps.len(), 1);
        assert_eq!(bar_deps[0].name().as_str(), "foo");
        assert_eq!(bar_deps[0].kind(), DependencyKind::Required);

        let optional = &formulae[2];
        assert!(optional.version().is_none());
        let kinds: Vec<DependencyKind> = optional.dependencies().iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                DependencyKind::Optional,
                DependencyKind::Build,
                DependencyKind::Required
            ]
        );
        assert_eq!(optional.dependencies()[2].tags(), ["universal".to_string()]);
        assert_eq!(optional.requirements()[0].name(), "xcode");
        assert_eq!(optional.requirements()[0].kind(), DependencyKind::Build);
    }

    #[test]
    fn test_parse_empty_index() {
        let formulae = FileSystemReader::parse_index("", Path::new("formulae.toml")).unwrap();
        assert!(formulae.is_empty());
    }

    #[test]
    fn test_parse_index_unknown_kind() {
        let content = r#"
[[formula]]
name = "bar"
dependencies = [{ name = "foo", kind = "runtime" }]
"#;
        let result = FileSystemReader::parse_index(content, Path::new("formulae.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_index_invalid_toml() {
        let result = FileSystemReader::parse_index("[[formula]\nname=", Path::new("bad.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to parse formula index"));
        assert!(err.contains("bad.toml"));
    }

    #[test]
    fn test_parse_index_rejects_misspelled_formula_key() {
        let content = r#"
[[formula]]
name = "a"
dependecies = ["b"]
"#;
        let result = FileSystemReader::parse_index(content, Path::new("formulae.toml"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RdepsError>(),
            Some(RdepsError::FormulaIndexParseError { .. })
        ));
        assert!(err.to_string().contains("dependecies"));
    }

    #[test]
    fn test_parse_index_rejects_misspelled_edge_key() {
        let content = r#"
[[formula]]
name = "a"
dependencies = [{ name = "b", knd = "build" }]
"#;
        let result = FileSystemReader::parse_index(content, Path::new("formulae.toml"));
        assert!(matches!(
            result.unwrap_err().downcast_ref::<RdepsError>(),
            Some(RdepsError::FormulaIndexParseError { .. })
        ));
    }

    #[test]
    fn test_parse_index_invalid_formula_name() {
        let content = r#"
[[formula]]
name = "bad name"
"#;
        let result = FileSystemReader::parse_index(content, Path::new("formulae.toml"));
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Invalid formula name"));
    }

    #[test]
    fn test_load_formulae_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(FORMULA_INDEX_FILENAME), INDEX).unwrap();

        let formulae = FileSystemReader::new()
            .load_formulae(temp_dir.path())
            .unwrap();
        assert_eq!(formulae.len(), 3);
    }

    #[test]
    fn test_load_formulae_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let index_path = temp_dir.path().join("core.toml");
        fs::write(&index_path, INDEX).unwrap();

        let formulae = FileSystemReader::new().load_formulae(&index_path).unwrap();
        assert_eq!(formulae.len(), 3);
    }

    #[test]
    fn test_load_formulae_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let result = FileSystemReader::new().load_formulae(temp_dir.path());
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Formula index not found"));
        assert!(err.contains("--formulae"));
    }
}
