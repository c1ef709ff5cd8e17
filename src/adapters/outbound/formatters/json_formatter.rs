use crate::application::read_models::{
    CiView, GroupItemView, LinkView, MetadataView, NodeView, QueryReadModel, RelationshipView,
    ResultView, SummaryView, TreeNodeView,
};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    metadata: Metadata<'a>,
    query: &'a str,
    summary: Summary,
    result: QueryResult<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
    query_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    ci_count: usize,
    relationship_count: usize,
    dangling_relationships: usize,
    duplicate_ci_ids: usize,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum QueryResult<'a> {
    Graph(GraphResult<'a>),
    Tree(TreeResult<'a>),
    Path(PathResult<'a>),
    Connected(ConnectedResult<'a>),
    Groups(GroupsResult<'a>),
    Types(TypesResult<'a>),
    List(ListResult<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphResult<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<&'a str>,
    nodes: Vec<Node<'a>>,
    links: Vec<Link<'a>>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    missing: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Node<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    ci_type: &'a str,
    is_root: bool,
}

#[derive(Debug, Serialize)]
struct Link<'a> {
    id: &'a str,
    source: &'a str,
    target: &'a str,
    #[serde(rename = "type")]
    link_type: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeResult<'a> {
    root: &'a str,
    found: bool,
    tree: Option<TreeNode<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cycles: Vec<Cycle<'a>>,
    truncated: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeNode<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    ci_type: &'a str,
    depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    relationship_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relationship_id: Option<&'a str>,
    children: Vec<TreeNode<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Cycle<'a> {
    relationship_id: &'a str,
    from: &'a str,
    to: &'a str,
}

#[derive(Debug, Serialize)]
struct PathResult<'a> {
    from: &'a str,
    to: &'a str,
    found: bool,
    hops: usize,
    path: &'a [String],
}

#[derive(Debug, Serialize)]
struct ConnectedResult<'a> {
    id: &'a str,
    count: usize,
    members: &'a [String],
}

#[derive(Debug, Serialize)]
struct GroupsResult<'a> {
    of: &'a str,
    groups: Vec<Group<'a>>,
}

#[derive(Debug, Serialize)]
struct Group<'a> {
    #[serde(rename = "type")]
    group_type: &'a str,
    count: usize,
    items: Vec<GroupItem<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GroupItem<'a> {
    Ci(Ci<'a>),
    Relationship(Relationship<'a>),
}

#[derive(Debug, Serialize)]
struct Ci<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    ci_type: &'a str,
    description: &'a str,
    tags: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship<'a> {
    id: &'a str,
    source_id: &'a str,
    target_id: &'a str,
    #[serde(rename = "type")]
    relationship_type: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TypesResult<'a> {
    ci_types: Vec<TypeCount<'a>>,
    relationship_types: &'a [String],
}

#[derive(Debug, Serialize)]
struct TypeCount<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResult<'a> {
    page: usize,
    limit: usize,
    total: usize,
    total_pages: usize,
    items: Vec<Ci<'a>>,
}

/// JsonFormatter adapter producing a pretty-printed JSON document
///
/// Field names are camelCase so diagram front ends can consume the output
/// directly.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, model: &QueryReadModel) -> Result<String> {
        let document = Document {
            metadata: Self::build_metadata(&model.metadata),
            query: model.result.query_name(),
            summary: Self::build_summary(&model.summary),
            result: Self::build_result(&model.result),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_metadata(metadata: &MetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &metadata.timestamp,
            tool_name: &metadata.tool_name,
            tool_version: &metadata.tool_version,
            query_id: &metadata.query_id,
        }
    }

    fn build_summary(summary: &SummaryView) -> Summary {
        Summary {
            ci_count: summary.ci_count,
            relationship_count: summary.relationship_count,
            dangling_relationships: summary.dangling_relationships,
            duplicate_ci_ids: summary.duplicate_ci_ids,
        }
    }

    fn build_result(result: &ResultView) -> QueryResult<'_> {
        match result {
            ResultView::Graph {
                root,
                nodes,
                links,
                missing,
            } => QueryResult::Graph(GraphResult {
                root: root.as_deref(),
                nodes: nodes.iter().map(Self::build_node).collect(),
                links: links.iter().map(Self::build_link).collect(),
                missing,
            }),
            ResultView::Tree {
                root,
                tree,
                cycles,
                truncated,
            } => QueryResult::Tree(TreeResult {
                root,
                found: tree.is_some(),
                tree: tree.as_ref().map(Self::build_tree_node),
                cycles: cycles
                    .iter()
                    .map(|cycle| Cycle {
                        relationship_id: &cycle.relationship_id,
                        from: &cycle.from,
                        to: &cycle.to,
                    })
                    .collect(),
                truncated: *truncated,
            }),
            ResultView::Path { from, to, path } => QueryResult::Path(PathResult {
                from,
                to,
                found: !path.is_empty(),
                hops: path.len().saturating_sub(1),
                path,
            }),
            ResultView::Connected { id, members } => QueryResult::Connected(ConnectedResult {
                id,
                count: members.len(),
                members,
            }),
            ResultView::Groups { target, groups } => QueryResult::Groups(GroupsResult {
                of: target,
                groups: groups
                    .iter()
                    .map(|group| Group {
                        group_type: &group.group_type,
                        count: group.items.len(),
                        items: group.items.iter().map(Self::build_group_item).collect(),
                    })
                    .collect(),
            }),
            ResultView::Types {
                ci_types,
                relationship_types,
            } => QueryResult::Types(TypesResult {
                ci_types: ci_types
                    .iter()
                    .map(|t| TypeCount {
                        type_name: &t.type_name,
                        count: t.count,
                    })
                    .collect(),
                relationship_types,
            }),
            ResultView::List {
                items,
                page,
                limit,
                total,
                total_pages,
            } => QueryResult::List(ListResult {
                page: *page,
                limit: *limit,
                total: *total,
                total_pages: *total_pages,
                items: items.iter().map(Self::build_ci).collect(),
            }),
        }
    }

    fn build_node(node: &NodeView) -> Node<'_> {
        Node {
            id: &node.id,
            name: &node.name,
            ci_type: &node.ci_type,
            is_root: node.is_root,
        }
    }

    fn build_link(link: &LinkView) -> Link<'_> {
        Link {
            id: &link.id,
            source: &link.source,
            target: &link.target,
            link_type: &link.link_type,
            description: &link.description,
        }
    }

    fn build_tree_node(node: &TreeNodeView) -> TreeNode<'_> {
        TreeNode {
            id: &node.id,
            name: &node.name,
            ci_type: &node.ci_type,
            depth: node.depth,
            relationship_type: node.relationship_type.as_deref(),
            relationship_id: node.relationship_id.as_deref(),
            children: node.children.iter().map(Self::build_tree_node).collect(),
        }
    }

    fn build_ci(ci: &CiView) -> Ci<'_> {
        Ci {
            id: &ci.id,
            name: &ci.name,
            ci_type: &ci.ci_type,
            description: &ci.description,
            tags: &ci.tags,
        }
    }

    fn build_relationship(rel: &RelationshipView) -> Relationship<'_> {
        Relationship {
            id: &rel.id,
            source_id: &rel.source_id,
            target_id: &rel.target_id,
            relationship_type: &rel.relationship_type,
            description: &rel.description,
        }
    }

    fn build_group_item(item: &GroupItemView) -> GroupItem<'_> {
        match item {
            GroupItemView::Ci(ci) => GroupItem::Ci(Self::build_ci(ci)),
            GroupItemView::Relationship(rel) => {
                GroupItem::Relationship(Self::build_relationship(rel))
            }
        }
    }
}
