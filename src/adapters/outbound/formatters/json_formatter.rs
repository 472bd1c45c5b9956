use crate::application::dto::{QueryMetadata, UsesResponse};
use crate::ports::outbound::DependentsFormatter;
use crate::reverse_deps::domain::{KindFilter, UnresolvedTarget};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    dependents: Vec<&'a str>,
    unresolved: &'a [UnresolvedTarget],
    query: Query<'a>,
    metadata: Metadata<'a>,
}

#[derive(Debug, Serialize)]
struct Query<'a> {
    targets: &'a [String],
    kinds: &'a KindFilter,
    recursive: bool,
    installed_only: bool,
    missing_only: bool,
    match_missing: bool,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    tool: &'a str,
    version: &'a str,
    timestamp: String,
}

impl<'a> From<&'a QueryMetadata> for Metadata<'a> {
    fn from(metadata: &'a QueryMetadata) -> Self {
        Self {
            tool: &metadata.tool_name,
            version: &metadata.tool_version,
            timestamp: metadata.timestamp.to_rfc3339(),
        }
    }
}

/// JsonFormatter adapter
///
/// Emits a single pretty-printed object holding the sorted dependents, the
/// unresolved targets, an echo of the query options and tool metadata.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependentsFormatter for JsonFormatter {
    fn format(&self, response: &UsesResponse) -> Result<String> {
        let spec = &response.spec;
        let document = Document {
            dependents: response.result.names(),
            unresolved: &response.unresolved,
            query: Query {
                targets: &response.targets,
                kinds: &spec.kinds,
                recursive: spec.recursive,
                installed_only: spec.installed_only,
                missing_only: spec.missing_only,
                match_missing: spec.match_missing,
            },
            metadata: Metadata::from(&response.metadata),
        };

        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
