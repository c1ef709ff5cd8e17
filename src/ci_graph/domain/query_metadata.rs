/// QueryMetadata value object stamped on every answer
#[derive(Debug, Clone)]
pub struct QueryMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    query_id: String,
}

impl QueryMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, query_id: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            query_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }
}
