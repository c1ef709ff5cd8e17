use crate::ci_graph::domain::{ConfigurationItem, Inventory, Relationship};
use crate::ports::outbound::InventoryReader;
use crate::shared::error::CmdbError;
use crate::shared::security::{read_validated_file, validate_not_symlink};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

/// Serialization formats an inventory export can use, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFileFormat {
    Json,
    Yaml,
    Toml,
}

impl InventoryFileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawInventory {
    #[serde(default)]
    cis: Vec<RawCi>,
    #[serde(default)]
    relationships: Vec<RawRelationship>,
}

#[derive(Debug, Deserialize)]
struct RawCi {
    id: String,
    name: String,
    #[serde(rename = "type")]
    ci_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawRelationship {
    id: String,
    #[serde(alias = "sourceId", alias = "source")]
    source_id: String,
    #[serde(alias = "targetId", alias = "target")]
    target_id: String,
    #[serde(rename = "type")]
    relationship_type: String,
    #[serde(default)]
    description: Option<String>,
}

/// FileSystemInventoryReader adapter loading a CMDB export from disk
///
/// Accepts `{ cis: [...], relationships: [...] }` as JSON, YAML or TOML.
/// Missing `description` and `tags` default to empty; unknown fields are ignored.
pub struct FileSystemInventoryReader;

impl FileSystemInventoryReader {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, content: &str) -> Result<RawInventory> {
        let format = InventoryFileFormat::from_path(path).ok_or_else(|| {
            CmdbError::InventoryParseError {
                path: path.to_path_buf(),
                details: "Unsupported file extension (expected .json, .yml, .yaml or .toml)"
                    .to_string(),
            }
        })?;

        let parsed = match format {
            InventoryFileFormat::Json => {
                serde_json::from_str::<RawInventory>(content).map_err(|e| e.to_string())
            }
            InventoryFileFormat::Yaml => {
                serde_yaml_ng::from_str::<RawInventory>(content).map_err(|e| e.to_string())
            }
            InventoryFileFormat::Toml => {
                toml::from_str::<RawInventory>(content).map_err(|e| e.to_string())
            }
        };

        parsed.map_err(|details| {
            CmdbError::InventoryParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }

    fn into_domain(raw: RawInventory) -> Result<Inventory> {
        let mut cis = Vec::with_capacity(raw.cis.len());
        for (index, ci) in raw.cis.into_iter().enumerate() {
            let item = ConfigurationItem::new(
                ci.id,
                ci.name,
                ci.ci_type,
                ci.description.unwrap_or_default(),
                ci.tags.unwrap_or_default(),
            )
            .map_err(|e| CmdbError::Validation {
                message: format!("cis[{}]: {}", index, e),
            })?;
            cis.push(item);
        }

        let mut relationships = Vec::with_capacity(raw.relationships.len());
        for (index, rel) in raw.relationships.into_iter().enumerate() {
            let relationship = Relationship::new(
                rel.id,
                rel.source_id,
                rel.target_id,
                rel.relationship_type,
                rel.description.unwrap_or_default(),
            )
            .map_err(|e| CmdbError::Validation {
                message: format!("relationships[{}]: {}", index, e),
            })?;
            relationships.push(relationship);
        }

        Ok(Inventory::new(cis, relationships))
    }
}

impl Default for FileSystemInventoryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for FileSystemInventoryReader {
    fn read_inventory(&self, path: &Path) -> Result<Inventory> {
        if !path.exists() && std::fs::symlink_metadata(path).is_err() {
            return Err(CmdbError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the CMDB to a JSON, YAML or TOML file and pass it with --input"
                    .to_string(),
            }
            .into());
        }

        validate_not_symlink(path, "read").map_err(|e| CmdbError::SecurityError {
            path: path.to_path_buf(),
            reason: e.to_string(),
            hint: "Pass the real file instead of a symbolic link".to_string(),
        })?;

        let content =
            read_validated_file(path, "inventory").map_err(|e| CmdbError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let raw = Self::parse(path, &content)?;
        Self::into_domain(raw)
    }
}
