//! Configuration file support for rdeps.
//!
//! Optional YAML configuration through `rdeps.config.yml`, discovered in the
//! current directory or passed with `--config`.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "rdeps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub formulae: Option<PathBuf>,
    pub cellar: Option<PathBuf>,
    pub format: Option<String>,
    pub recursive: Option<bool>,
    pub include_build: Option<bool>,
    pub include_test: Option<bool>,
    pub include_optional: Option<bool>,
    pub skip_recommended: Option<bool>,
    pub installed: Option<bool>,
    pub missing: Option<bool>,
    pub match_missing: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, validated at load time
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(anyhow::Error::msg)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path, reporter: &dyn ProgressReporter) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to unit, not to a mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config, reporter);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path, reporter: &dyn ProgressReporter) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path, reporter).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: 'format' must be one of: text, json.",
            e
        );
    }

    if config.installed == Some(true) && config.missing == Some(true) {
        bail!(
            "Invalid config: 'installed' and 'missing' cannot both be true.\n\n\
             💡 Hint: A formula that is currently installed always has some version installed."
        );
    }

    for (field, path) in [("formulae", &config.formulae), ("cellar", &config.cellar)] {
        if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            bail!("Invalid config: '{}' must not be empty.", field);
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile, reporter: &dyn ProgressReporter) {
    for key in config.unknown_fields.keys() {
        reporter.report_warning(&format!("Unknown config field '{}' will be ignored.", key));
    }
}
