use super::{EntityIndex, NeighborhoodExpander, RelationshipIndex};
use crate::ci_graph::domain::{ConfigurationItem, GraphLink, GraphNode, GraphView, Relationship};
use std::collections::HashSet;

/// GraphViewBuilder service producing the node/link projection for network diagrams
///
/// Ids without a CI record are skipped and listed in [`GraphView::missing`];
/// links touching them are dropped so every link has both endpoints among
/// the returned nodes.
pub struct GraphViewBuilder;

impl GraphViewBuilder {
    /// Builds the full graph (no root) or the radius-2 neighborhood of `root_id`
    ///
    /// # Arguments
    /// * `cis` - Every known CI
    /// * `relationships` - Every known relationship
    /// * `root_id` - Optional focus CI; its node is flagged `is_root`
    pub fn build(
        cis: &[ConfigurationItem],
        relationships: &[Relationship],
        root_id: Option<&str>,
    ) -> GraphView {
        let entities = EntityIndex::build(cis);
        let adjacency = RelationshipIndex::build(relationships);
        let included = NeighborhoodExpander::expand_indexed(cis, &entities, &adjacency, root_id);

        let mut nodes = Vec::with_capacity(included.len());
        let mut missing = Vec::new();
        let mut drawn: HashSet<&str> = HashSet::with_capacity(included.len());

        for id in included {
            match entities.get(id) {
                Some(ci) => {
                    if drawn.insert(ci.id()) {
                        nodes.push(GraphNode {
                            id: ci.id().to_string(),
                            name: ci.name().to_string(),
                            ci_type: ci.ci_type().to_string(),
                            is_root: root_id == Some(ci.id()),
                        });
                    }
                }
                None => missing.push(id.to_string()),
            }
        }

        let links = relationships
            .iter()
            .filter(|rel| drawn.contains(rel.source_id()) && drawn.contains(rel.target_id()))
            .map(|rel| GraphLink {
                id: rel.id().to_string(),
                source: rel.source_id().to_string(),
                target: rel.target_id().to_string(),
                link_type: rel.relationship_type().to_string(),
                description: rel.description().to_string(),
            })
            .collect();

        GraphView {
            nodes,
            links,
            missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci_graph::services::test_support::{ci, rel};

    #[test]
    fn test_no_root_returns_every_entity_and_relationship() {
        let cis = vec![ci("A"), ci("B"), ci("C")];
        let rels = vec![rel("r1", "A", "B"), rel("r2", "B", "C")];

        let view = GraphViewBuilder::build(&cis, &rels, None);

        assert_eq!(view.node_count(), 3);
        assert_eq!(view.link_count(), 2);
        assert!(view.nodes.iter().all(|n| !n.is_root));
        assert!(view.missing.is_empty());
    }

    #[test]
    fn test_link_fields_are_projected() {
        let cis = vec![ci("A"), ci("B")];
        let rels = vec![rel("r1", "A", "B")];

        let view = GraphViewBuilder::build(&cis, &rels, None);
        let link = &view.links[0];

        assert_eq!(link.id, "r1");
        assert_eq!(link.source, "A");
        assert_eq!(link.target, "B");
        assert_eq!(link.link_type, "depends_on");
    }

    #[test]
    fn test_root_marks_root_and_limits_to_neighborhood() {
        // A - B - C - D
        let cis = vec![ci("A"), ci("B"), ci("C"), ci("D")];
        let rels = vec![rel("r1", "A", "B"), rel("r2", "B", "C"), rel("r3", "C", "D")];

        let view = GraphViewBuilder::build(&cis, &rels, Some("A"));

        let ids: Vec<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert!(view.nodes[0].is_root);
        assert!(!view.contains_node("D"));

        let link_ids: Vec<&str> = view.links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(link_ids, vec!["r1", "r2"]);
        for link in &view.links {
            assert!(view.contains_node(&link.source));
            assert!(view.contains_node(&link.target));
        }
    }

    #[test]
    fn test_dangling_endpoint_is_skipped_and_reported() {
        let cis = vec![ci("A"), ci("B")];
        let rels = vec![rel("r1", "A", "B"), rel("r2", "A", "ghost")];

        let view = GraphViewBuilder::build(&cis, &rels, Some("A"));

        assert_eq!(view.node_count(), 2);
        assert_eq!(view.missing, vec!["ghost".to_string()]);
        assert_eq!(view.link_count(), 1);
    }

    #[test]
    fn test_dangling_relationship_dropped_without_root() {
        let cis = vec![ci("A")];
        let rels = vec![rel("r1", "A", "ghost")];

        let view = GraphViewBuilder::build(&cis, &rels, None);

        assert_eq!(view.node_count(), 1);
        assert_eq!(view.link_count(), 0);
    }

    #[test]
    fn test_unknown_root_is_empty() {
        let cis = vec![ci("A"), ci("B")];
        let rels = vec![rel("r1", "A", "B")];

        let view = GraphViewBuilder::build(&cis, &rels, Some("Z"));

        assert!(view.is_empty());
        assert!(view.links.is_empty());
    }

    #[test]
    fn test_duplicate_entity_ids_produce_one_node() {
        let cis = vec![ci("A"), ci("A")];
        let view = GraphViewBuilder::build(&cis, &[], None);
        assert_eq!(view.node_count(), 1);
    }
}
