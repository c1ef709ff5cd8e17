use crate::ci_graph::domain::Categorized;
use indexmap::IndexMap;

/// Grouping service for bucketing CIs or relationships by their `type`
///
/// Every map returned here keeps the first-occurrence order of the types and
/// the original relative order of the items inside each bucket.
pub struct Grouping;

impl Grouping {
    /// Groups items by category
    pub fn group_by_type<T: Categorized>(items: &[T]) -> IndexMap<&str, Vec<&T>> {
        let mut groups: IndexMap<&str, Vec<&T>> = IndexMap::new();
        for item in items {
            groups.entry(item.category()).or_default().push(item);
        }
        groups
    }

    /// Distinct categories in first-occurrence order
    pub fn distinct_types<T: Categorized>(items: &[T]) -> Vec<&str> {
        let mut seen: IndexMap<&str, ()> = IndexMap::new();
        for item in items {
            seen.entry(item.category()).or_insert(());
        }
        seen.into_keys().collect()
    }

    /// Number of items per category
    pub fn type_counts<T: Categorized>(items: &[T]) -> IndexMap<&str, usize> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for item in items {
            *counts.entry(item.category()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci_graph::domain::{ConfigurationItem, Relationship};

    fn typed_ci(id: &str, ci_type: &str) -> ConfigurationItem {
        ConfigurationItem::new(
            id.to_string(),
            id.to_string(),
            ci_type.to_string(),
            String::new(),
            vec![],
        )
        .unwrap()
    }

    fn typed_rel(id: &str, rel_type: &str) -> Relationship {
        Relationship::new(
            id.to_string(),
            "A".to_string(),
            "B".to_string(),
            rel_type.to_string(),
            String::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_group_cis_by_type() {
        let cis = vec![
            typed_ci("web-1", "Server"),
            typed_ci("db", "Database"),
            typed_ci("web-2", "Server"),
        ];

        let groups = Grouping::group_by_type(&cis);

        let types: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(types, vec!["Server", "Database"]);

        let servers: Vec<&str> = groups["Server"].iter().map(|ci| ci.id()).collect();
        assert_eq!(servers, vec!["web-1", "web-2"]);
        assert_eq!(groups["Database"].len(), 1);
    }

    #[test]
    fn test_group_relationships_by_type() {
        let rels = vec![
            typed_rel("r1", "runs_on"),
            typed_rel("r2", "depends_on"),
            typed_rel("r3", "runs_on"),
        ];

        let groups = Grouping::group_by_type(&rels);
        let total: usize = groups.values().map(Vec::len).sum();

        assert_eq!(total, rels.len());
        assert_eq!(groups["runs_on"].len(), 2);

        let runs_on: Vec<&str> = groups["runs_on"].iter().map(|r| r.id()).collect();
        assert_eq!(runs_on, vec!["r1", "r3"]);
    }

    #[test]
    fn test_distinct_types_and_counts() {
        let cis = vec![
            typed_ci("a", "Server"),
            typed_ci("b", "Application"),
            typed_ci("c", "Server"),
            typed_ci("d", "Server"),
        ];

        assert_eq!(Grouping::distinct_types(&cis), vec!["Server", "Application"]);

        let counts = Grouping::type_counts(&cis);
        assert_eq!(counts["Server"], 3);
        assert_eq!(counts["Application"], 1);
    }

    #[test]
    fn test_empty_input() {
        let cis: Vec<ConfigurationItem> = Vec::new();
        assert!(Grouping::group_by_type(&cis).is_empty());
        assert!(Grouping::distinct_types(&cis).is_empty());
    }
}
