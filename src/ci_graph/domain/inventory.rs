use super::{ConfigurationItem, Relationship};

/// Inventory aggregate: one snapshot of the CMDB, CIs plus the relationships between them
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    cis: Vec<ConfigurationItem>,
    relationships: Vec<Relationship>,
}

impl Inventory {
    pub fn new(cis: Vec<ConfigurationItem>, relationships: Vec<Relationship>) -> Self {
        Self { cis, relationships }
    }

    pub fn cis(&self) -> &[ConfigurationItem] {
        &self.cis
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn ci_count(&self) -> usize {
        self.cis.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cis.is_empty() && self.relationships.is_empty()
    }
}

/// Anything that carries a categorical `type` used for grouping
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for ConfigurationItem {
    fn category(&self) -> &str {
        self.ci_type()
    }
}

impl Categorized for Relationship {
    fn category(&self) -> &str {
        self.relationship_type()
    }
}
