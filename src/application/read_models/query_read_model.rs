//! Query read model
//!
//! Aggregates the metadata, inventory summary and the answer itself in the
//! shape the formatters consume.

use super::views::{CiView, CycleView, GroupView, LinkView, NodeView, TreeNodeView, TypeCountView};

#[derive(Debug, Clone)]
pub struct QueryReadModel {
    pub metadata: MetadataView,
    pub summary: SummaryView,
    pub result: ResultView,
}

#[derive(Debug, Clone)]
pub struct MetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub query_id: String,
}

/// Inventory size and integrity warning counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub ci_count: usize,
    pub relationship_count: usize,
    pub dangling_relationships: usize,
    pub duplicate_ci_ids: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Graph {
        root: Option<String>,
        nodes: Vec<NodeView>,
        links: Vec<LinkView>,
        missing: Vec<String>,
    },
    Tree {
        root: String,
        tree: Option<TreeNodeView>,
        cycles: Vec<CycleView>,
        truncated: bool,
    },
    Path {
        from: String,
        to: String,
        path: Vec<String>,
    },
    Connected {
        id: String,
        members: Vec<String>,
    },
    Groups {
        target: String,
        groups: Vec<GroupView>,
    },
    Types {
        ci_types: Vec<TypeCountView>,
        relationship_types: Vec<String>,
    },
    List {
        items: Vec<CiView>,
        page: usize,
        limit: usize,
        total: usize,
        total_pages: usize,
    },
}

impl ResultView {
    pub fn query_name(&self) -> &'static str {
        match self {
            ResultView::Graph { .. } => "graph",
            ResultView::Tree { .. } => "tree",
            ResultView::Path { .. } => "path",
            ResultView::Connected { .. } => "connected",
            ResultView::Groups { .. } => "groups",
            ResultView::Types { .. } => "types",
            ResultView::List { .. } => "list",
        }
    }
}
