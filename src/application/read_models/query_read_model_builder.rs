//! Builder for constructing QueryReadModel from a use case response

use super::query_read_model::{MetadataView, QueryReadModel, ResultView, SummaryView};
use super::views::{
    CiView, CycleView, GroupItemView, GroupView, LinkView, NodeView, RelationshipView,
    TreeNodeView, TypeCountView,
};
use crate::application::dto::{GraphResponse, QueryOutcome};
use crate::ci_graph::domain::{ConfigurationItem, QueryMetadata, Relationship, TreeNode, TreeView};

/// Builder for constructing QueryReadModel from domain objects
pub struct QueryReadModelBuilder;

impl QueryReadModelBuilder {
    pub fn build(response: &GraphResponse) -> QueryReadModel {
        QueryReadModel {
            metadata: Self::build_metadata(&response.metadata),
            summary: SummaryView {
                ci_count: response.ci_count,
                relationship_count: response.relationship_count,
                dangling_relationships: response.integrity.dangling.len(),
                duplicate_ci_ids: response.integrity.duplicate_ids.len(),
            },
            result: Self::build_result(&response.outcome),
        }
    }

    fn build_metadata(metadata: &QueryMetadata) -> MetadataView {
        MetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            query_id: metadata.query_id().to_string(),
        }
    }

    fn build_result(outcome: &QueryOutcome) -> ResultView {
        match outcome {
            QueryOutcome::Graph { root, view } => ResultView::Graph {
                root: root.clone(),
                nodes: view
                    .nodes
                    .iter()
                    .map(|node| NodeView {
                        id: node.id.clone(),
                        name: node.name.clone(),
                        ci_type: node.ci_type.clone(),
                        is_root: node.is_root,
                    })
                    .collect(),
                links: view
                    .links
                    .iter()
                    .map(|link| LinkView {
                        id: link.id.clone(),
                        source: link.source.clone(),
                        target: link.target.clone(),
                        link_type: link.link_type.clone(),
                        description: link.description.clone(),
                    })
                    .collect(),
                missing: view.missing.clone(),
            },
            QueryOutcome::Tree { root, view } => Self::build_tree(root, view.as_ref()),
            QueryOutcome::Path { from, to, path } => ResultView::Path {
                from: from.clone(),
                to: to.clone(),
                path: path.clone(),
            },
            QueryOutcome::Connected { id, members } => ResultView::Connected {
                id: id.clone(),
                members: members.clone(),
            },
            QueryOutcome::CiGroups(groups) => ResultView::Groups {
                target: "cis".to_string(),
                groups: groups
                    .iter()
                    .map(|(group_type, cis)| GroupView {
                        group_type: group_type.clone(),
                        items: cis.iter().map(|ci| GroupItemView::Ci(Self::ci_view(ci))).collect(),
                    })
                    .collect(),
            },
            QueryOutcome::RelationshipGroups(groups) => ResultView::Groups {
                target: "relationships".to_string(),
                groups: groups
                    .iter()
                    .map(|(group_type, rels)| GroupView {
                        group_type: group_type.clone(),
                        items: rels
                            .iter()
                            .map(|rel| GroupItemView::Relationship(Self::relationship_view(rel)))
                            .collect(),
                    })
                    .collect(),
            },
            QueryOutcome::Types {
                ci_types,
                relationship_types,
            } => ResultView::Types {
                ci_types: ci_types
                    .iter()
                    .map(|(type_name, count)| TypeCountView {
                        type_name: type_name.clone(),
                        count: *count,
                    })
                    .collect(),
                relationship_types: relationship_types.clone(),
            },
            QueryOutcome::List {
                items,
                page,
                limit,
                total,
                total_pages,
            } => ResultView::List {
                items: items.iter().map(Self::ci_view).collect(),
                page: *page,
                limit: *limit,
                total: *total,
                total_pages: *total_pages,
            },
        }
    }

    fn build_tree(root: &str, view: Option<&TreeView>) -> ResultView {
        ResultView::Tree {
            root: root.to_string(),
            tree: view.map(|v| Self::tree_node_view(&v.root)),
            cycles: view
                .map(|v| {
                    v.cycles
                        .iter()
                        .map(|cycle| CycleView {
                            relationship_id: cycle.relationship_id.clone(),
                            from: cycle.from.clone(),
                            to: cycle.to.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            truncated: view.is_some_and(|v| v.truncated),
        }
    }

    fn tree_node_view(node: &TreeNode) -> TreeNodeView {
        TreeNodeView {
            id: node.id.clone(),
            name: node.name.clone(),
            ci_type: node.ci_type.clone(),
            depth: node.depth,
            relationship_type: node.relationship_type.clone(),
            relationship_id: node.relationship_id.clone(),
            children: node.children.iter().map(Self::tree_node_view).collect(),
        }
    }

    fn ci_view(ci: &ConfigurationItem) -> CiView {
        CiView {
            id: ci.id().to_string(),
            name: ci.name().to_string(),
            ci_type: ci.ci_type().to_string(),
            description: ci.description().to_string(),
            tags: ci.tags().to_vec(),
        }
    }

    fn relationship_view(rel: &Relationship) -> RelationshipView {
        RelationshipView {
            id: rel.id().to_string(),
            source_id: rel.source_id().to_string(),
            target_id: rel.target_id().to_string(),
            relationship_type: rel.relationship_type().to_string(),
            description: rel.description().to_string(),
        }
    }
}
