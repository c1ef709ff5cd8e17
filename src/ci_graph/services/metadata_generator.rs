use crate::ci_graph::domain::QueryMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator stamps each query answer with time, tool and a unique id
pub struct MetadataGenerator;

impl MetadataGenerator {
    pub const TOOL_NAME: &'static str = "cmdb-graph";

    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> QueryMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let query_id = format!("urn:uuid:{}", Uuid::new_v4());

        QueryMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            query_id,
        )
    }

    /// Metadata for this binary, version taken from Cargo.toml at compile time
    pub fn generate_default_metadata() -> QueryMetadata {
        Self::generate_metadata(Self::TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
