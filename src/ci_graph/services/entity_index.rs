use crate::ci_graph::domain::ConfigurationItem;
use std::collections::HashMap;

/// EntityIndex - O(1) lookup from CI id to CI record
///
/// Borrows the CI slice it was built from. When an id occurs more than once
/// the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex<'a> {
    by_id: HashMap<&'a str, &'a ConfigurationItem>,
}

impl<'a> EntityIndex<'a> {
    pub fn build(cis: &'a [ConfigurationItem]) -> Self {
        let mut by_id = HashMap::with_capacity(cis.len());
        for ci in cis {
            by_id.insert(ci.id(), ci);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a ConfigurationItem> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
