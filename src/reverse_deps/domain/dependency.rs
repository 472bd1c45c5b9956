use super::FormulaName;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Classification of a dependency edge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// Needed at build time and at runtime
    #[default]
    Required,
    /// Needed only while building
    Build,
    /// Needed only to run the formula's test block
    Test,
    /// Installed unless the user opts out
    Recommended,
    /// Installed only when the user opts in
    Optional,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 5] = [
        DependencyKind::Required,
        DependencyKind::Build,
        DependencyKind::Test,
        DependencyKind::Recommended,
        DependencyKind::Optional,
    ];

    /// Derives the kind from a dependency's tag list.
    ///
    /// The first tag that names a kind wins; tags that don't (e.g. `universal`)
    /// are ignored. Returns `None` when no tag names a kind.
    pub fn from_tags<I, S>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().find_map(|tag| tag.as_ref().parse().ok())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Required => "required",
            DependencyKind::Build => "build",
            DependencyKind::Test => "test",
            DependencyKind::Recommended => "recommended",
            DependencyKind::Optional => "optional",
        }
    }
}

impl std::str::FromStr for DependencyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim_start_matches(':').to_lowercase().as_str() {
            "required" => Ok(DependencyKind::Required),
            "build" => Ok(DependencyKind::Build),
            "test" => Ok(DependencyKind::Test),
            "recommended" => Ok(DependencyKind::Recommended),
            "optional" => Ok(DependencyKind::Optional),
            _ => Err(format!(
                "Invalid dependency kind: {}. Expected one of required, build, test, recommended, optional",
                s
            )),
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared edge from one formula to another, by name.
///
/// The referenced formula may not exist in the universe; such edges are
/// treated as dead ends by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: FormulaName,
    kind: DependencyKind,
    tags: Vec<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>, kind: DependencyKind) -> Result<Self> {
        Ok(Self {
            name: FormulaName::new(name)?,
            kind,
            tags: Vec::new(),
        })
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn name(&self) -> &FormulaName {
        &self.name
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A non-formula build constraint such as a platform or tool version.
///
/// Only its name and kind matter here: a requirement whose name equals a
/// query target counts as an edge to that target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    name: String,
    kind: DependencyKind,
}

impl Requirement {
    pub fn new(name: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }
}
