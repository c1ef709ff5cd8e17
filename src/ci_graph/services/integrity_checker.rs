use super::EntityIndex;
use crate::ci_graph::domain::{ConfigurationItem, Relationship};
use indexmap::IndexMap;

/// A relationship with at least one endpoint that names no CI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingRelationship {
    pub relationship_id: String,
    pub missing_source: Option<String>,
    pub missing_target: Option<String>,
}

/// Result of an integrity check over one inventory snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub dangling: Vec<DanglingRelationship>,
    /// CI ids occurring more than once, with their occurrence count
    pub duplicate_ids: Vec<(String, usize)>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.duplicate_ids.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.dangling.len() + self.duplicate_ids.len()
    }
}

/// IntegrityChecker service finding dangling references and duplicate CI ids
///
/// Neither problem is fatal for the graph functions; the report exists so a
/// caller can warn about it.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn check(cis: &[ConfigurationItem], relationships: &[Relationship]) -> IntegrityReport {
        Self::check_with_progress(cis, relationships, |_, _| {})
    }

    /// Same as [`check`](Self::check), calling `on_progress(done, total)`
    /// after each relationship
    pub fn check_with_progress<F>(
        cis: &[ConfigurationItem],
        relationships: &[Relationship],
        mut on_progress: F,
    ) -> IntegrityReport
    where
        F: FnMut(usize, usize),
    {
        let entities = EntityIndex::build(cis);
        let total = relationships.len();

        let mut dangling = Vec::new();
        for (index, rel) in relationships.iter().enumerate() {
            let missing_source = (!entities.contains(rel.source_id())).then(|| rel.source_id().to_string());
            let missing_target = (!entities.contains(rel.target_id())).then(|| rel.target_id().to_string());

            if missing_source.is_some() || missing_target.is_some() {
                dangling.push(DanglingRelationship {
                    relationship_id: rel.id().to_string(),
                    missing_source,
                    missing_target,
                });
            }
            on_progress(index + 1, total);
        }

        let mut occurrences: IndexMap<&str, usize> = IndexMap::new();
        for ci in cis {
            *occurrences.entry(ci.id()).or_insert(0) += 1;
        }
        let duplicate_ids = occurrences
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, count)| (id.to_string(), count))
            .collect();

        IntegrityReport {
            dangling,
            duplicate_ids,
        }
    }
}
