use crate::reverse_deps::domain::{DependentsResult, QuerySpec, UnresolvedTarget};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tool name reported in machine-readable output
pub const TOOL_NAME: &str = "rdeps";

/// Who answered the query and when
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryMetadata {
    pub tool_name: String,
    pub tool_version: String,
    pub timestamp: DateTime<Utc>,
}

impl QueryMetadata {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp,
        }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

/// UsesResponse - result of the uses query, ready for formatting
///
/// `unresolved` lists targets that were not in the universe; the dependents
/// of every other target are still complete.
#[derive(Debug, Clone)]
pub struct UsesResponse {
    pub targets: Vec<String>,
    pub spec: QuerySpec,
    pub result: DependentsResult,
    pub unresolved: Vec<UnresolvedTarget>,
    pub metadata: QueryMetadata,
}

impl UsesResponse {
    pub fn new(
        targets: Vec<String>,
        spec: QuerySpec,
        result: DependentsResult,
        unresolved: Vec<UnresolvedTarget>,
        metadata: QueryMetadata,
    ) -> Self {
        Self {
            targets,
            spec,
            result,
            unresolved,
            metadata,
        }
    }

    pub fn has_unresolved_targets(&self) -> bool {
        !self.unresolved.is_empty()
    }

    /// A target that does not exist still had formulae naming it.
    /// Only possible when missing targets are matched by name.
    pub fn missing_targets_have_dependents(&self) -> bool {
        self.unresolved.iter().any(UnresolvedTarget::has_dependents) && !self.result.is_empty()
    }
}
