//! Flat node/link projection fed to force/network diagrams.

/// A CI as drawn in a network diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub ci_type: String,
    pub is_root: bool,
}

/// A relationship as drawn in a network diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLink {
    pub id: String,
    pub source: String,
    pub target: String,
    pub link_type: String,
    pub description: String,
}

/// Result of the graph view builder.
///
/// `missing` lists ids that were inside the neighborhood but have no CI
/// record (dangling relationship endpoints). They are neither nodes nor
/// link endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
    pub missing: Vec<String>,
}

impl GraphView {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
