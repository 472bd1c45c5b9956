use crate::reverse_deps::domain::{KindFilter, QuerySpec};
use crate::shared::error::RdepsError;
use crate::shared::Result;
use std::path::PathBuf;

/// UsesRequest - request DTO for the uses query
#[derive(Debug, Clone)]
pub struct UsesRequest {
    /// Formula names to find dependents of, as given by the user
    pub targets: Vec<String>,
    /// Formula index file, or a directory holding `formulae.toml`
    pub formulae_path: PathBuf,
    /// Query options
    pub spec: QuerySpec,
}

impl UsesRequest {
    pub fn new(targets: Vec<String>, formulae_path: PathBuf, spec: QuerySpec) -> Self {
        Self {
            targets,
            formulae_path,
            spec,
        }
    }

    pub fn builder() -> UsesRequestBuilder {
        UsesRequestBuilder::default()
    }
}

/// Builder for [`UsesRequest`]; `build` validates the combination of options
#[derive(Debug, Default)]
pub struct UsesRequestBuilder {
    targets: Vec<String>,
    formulae_path: Option<PathBuf>,
    kinds: Option<KindFilter>,
    recursive: bool,
    installed_only: bool,
    missing_only: bool,
    match_missing: bool,
}

impl UsesRequestBuilder {
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets.extend(targets.into_iter().map(Into::into));
        self
    }

    pub fn formulae_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.formulae_path = Some(path.into());
        self
    }

    pub fn kinds(mut self, kinds: KindFilter) -> Self {
        self.kinds = Some(kinds);
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn installed_only(mut self, installed_only: bool) -> Self {
        self.installed_only = installed_only;
        self
    }

    pub fn missing_only(mut self, missing_only: bool) -> Self {
        self.missing_only = missing_only;
        self
    }

    pub fn match_missing(mut self, match_missing: bool) -> Self {
        self.match_missing = match_missing;
        self
    }

    pub fn build(self) -> Result<UsesRequest> {
        let targets: Vec<String> = self
            .targets
            .into_iter()
            .map(|target| target.trim().to_string())
            .collect();

        if targets.is_empty() {
            return Err(validation("At least one formula must be given"));
        }

        if targets.iter().any(String::is_empty) {
            return Err(validation("Formula names must not be empty"));
        }

        let formulae_path = self
            .formulae_path
            .ok_or_else(|| validation("A formula index path is required"))?;

        // Currently installed implies some version is installed
        if self.installed_only && self.missing_only {
            return Err(validation(
                "--installed and --missing cannot be combined: no formula can be both",
            ));
        }

        let spec = QuerySpec::new(self.kinds.unwrap_or_default())
            .recursive(self.recursive)
            .installed_only(self.installed_only)
            .missing_only(self.missing_only)
            .match_missing(self.match_missing);

        Ok(UsesRequest::new(targets, formulae_path, spec))
    }
}

fn validation(message: &str) -> anyhow::Error {
    RdepsError::Validation {
        message: message.to_string(),
    }
    .into()
}
