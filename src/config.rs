//! Configuration file support for cmdb-graph.
//!
//! Provides YAML-based configuration through `cmdb-graph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::security::read_validated_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cmdb-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// `json` or `markdown`
    pub format: Option<String>,
    /// Inventory file used when `--input` is not given
    pub input: Option<PathBuf>,
    /// Page size for `list`
    pub page_size: Option<usize>,
    /// Report dangling relationships and duplicate ids (default true)
    pub warn_dangling: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_validated_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        if let Err(e) = format.parse::<crate::application::dto::OutputFormat>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: Use 'format: json' or 'format: markdown'.",
                e
            );
        }
    }

    if config.page_size == Some(0) {
        bail!("Invalid config: page_size must be at least 1.");
    }

    if let Some(input) = &config.input {
        if input.as_os_str().is_empty() {
            bail!("Invalid config: input must not be empty.");
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
