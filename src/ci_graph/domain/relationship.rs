use super::configuration_item::{validate_identifier, validate_type_name};
use crate::shared::Result;

/// Directed, typed edge from `source_id` to `target_id`.
///
/// Endpoints are not checked against any CI list; relationships entered by
/// users may reference CIs that no longer exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    id: String,
    source_id: String,
    target_id: String,
    relationship_type: String,
    description: String,
}

impl Relationship {
    pub fn new(
        id: String,
        source_id: String,
        target_id: String,
        relationship_type: String,
        description: String,
    ) -> Result<Self> {
        validate_identifier(&id, "Relationship id")?;
        validate_identifier(&source_id, &format!("Relationship '{}': source_id", id))?;
        validate_identifier(&target_id, &format!("Relationship '{}': target_id", id))?;
        validate_type_name(&relationship_type, &format!("Relationship '{}': type", id))?;

        Ok(Self {
            id,
            source_id,
            target_id,
            relationship_type,
            description,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn relationship_type(&self) -> &str {
        &self.relationship_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
