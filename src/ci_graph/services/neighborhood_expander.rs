use super::{EntityIndex, RelationshipIndex};
use crate::ci_graph::domain::{ConfigurationItem, Relationship};
use indexmap::IndexSet;

/// NeighborhoodExpander service for computing the radius-2 ego network of a CI
pub struct NeighborhoodExpander;

impl NeighborhoodExpander {
    /// Number of hops included around the root
    pub const RADIUS: usize = 2;

    /// Computes the set of ids to show
    ///
    /// # Arguments
    /// * `cis` - Every known CI
    /// * `relationships` - Every known relationship
    /// * `root_id` - Optional focus CI
    ///
    /// # Returns
    /// * no root: every CI id, in input order
    /// * known root: root, then every endpoint of a relationship touching
    ///   root, then every endpoint of a relationship touching one of those
    /// * unknown root: empty set
    ///
    /// Ids reached through relationships may be dangling (no CI record).
    pub fn expand<'a>(
        cis: &'a [ConfigurationItem],
        relationships: &'a [Relationship],
        root_id: Option<&str>,
    ) -> IndexSet<&'a str> {
        let entities = EntityIndex::build(cis);
        let adjacency = RelationshipIndex::build(relationships);
        Self::expand_indexed(cis, &entities, &adjacency, root_id)
    }

    /// Same as [`expand`](Self::expand) for callers that already hold the indexes
    pub fn expand_indexed<'a>(
        cis: &'a [ConfigurationItem],
        entities: &EntityIndex<'a>,
        adjacency: &RelationshipIndex<'a>,
        root_id: Option<&str>,
    ) -> IndexSet<&'a str> {
        let Some(root_id) = root_id else {
            return cis.iter().map(ConfigurationItem::id).collect();
        };

        let Some(root) = entities.get(root_id) else {
            return IndexSet::new();
        };
        let root = root.id();

        let mut included: IndexSet<&'a str> = IndexSet::new();
        included.insert(root);

        // hop 1
        included.extend(adjacency.neighbors(root));

        // hop 2, from every hop-1 id except the root itself
        let first_hop: Vec<&'a str> = included.iter().copied().filter(|id| *id != root).collect();
        for id in first_hop {
            included.extend(adjacency.neighbors(id));
        }

        included
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci_graph::services::test_support::{ci, rel};

    fn chain() -> (Vec<ConfigurationItem>, Vec<Relationship>) {
        // A - B - C - D - E
        let cis = vec![ci("A"), ci("B"), ci("C"), ci("D"), ci("E")];
        let rels = vec![
            rel("r1", "A", "B"),
            rel("r2", "B", "C"),
            rel("r3", "C", "D"),
            rel("r4", "D", "E"),
        ];
        (cis, rels)
    }

    #[test]
    fn test_no_root_includes_every_entity() {
        let (cis, rels) = chain();
        let included = NeighborhoodExpander::expand(&cis, &rels, None);

        let ids: Vec<&str> = included.into_iter().collect();
        assert_eq!(ids, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_root_includes_two_hops() {
        let (cis, rels) = chain();
        let included = NeighborhoodExpander::expand(&cis, &rels, Some("C"));

        assert_eq!(included.len(), 5);
        let included = NeighborhoodExpander::expand(&cis, &rels, Some("A"));
        let ids: Vec<&str> = included.into_iter().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_direction_is_ignored() {
        let cis = vec![ci("A"), ci("B"), ci("C")];
        let rels = vec![rel("r1", "B", "A"), rel("r2", "C", "B")];
        let included = NeighborhoodExpander::expand(&cis, &rels, Some("A"));

        assert!(included.contains("B"));
        assert!(included.contains("C"));
    }

    #[test]
    fn test_unknown_root_is_empty() {
        let (cis, rels) = chain();
        let included = NeighborhoodExpander::expand(&cis, &rels, Some("Z"));
        assert!(included.is_empty());
    }

    #[test]
    fn test_isolated_root_is_singleton() {
        let cis = vec![ci("A"), ci("B")];
        let included = NeighborhoodExpander::expand(&cis, &[], Some("A"));

        let ids: Vec<&str> = included.into_iter().collect();
        assert_eq!(ids, vec!["A"]);
    }

    #[test]
    fn test_dangling_endpoint_is_included() {
        let cis = vec![ci("A")];
        let rels = vec![rel("r1", "A", "ghost")];
        let included = NeighborhoodExpander::expand(&cis, &rels, Some("A"));

        assert!(included.contains("ghost"));
    }

    #[test]
    fn test_idempotent() {
        let (cis, rels) = chain();
        let first = NeighborhoodExpander::expand(&cis, &rels, Some("B"));
        let second = NeighborhoodExpander::expand(&cis, &rels, Some("B"));
        assert_eq!(first, second);
    }
}
