use crate::ci_graph::services::{CiFilter, Paginator};
use std::path::PathBuf;

/// Which collection the `groups` query buckets by type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupTarget {
    Cis,
    Relationships,
}

impl std::fmt::Display for GroupTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupTarget::Cis => write!(f, "cis"),
            GroupTarget::Relationships => write!(f, "relationships"),
        }
    }
}

/// One question asked of an inventory snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQuery {
    /// Node/link view, whole inventory or the neighborhood of `root`
    Graph { root: Option<String> },
    /// Hierarchy along outgoing relationships from `root`
    Tree { root: String },
    /// Fewest-hop path between two CIs
    Path { from: String, to: String },
    /// Everything reachable from `id`
    Connected { id: String },
    Groups { target: GroupTarget },
    /// Distinct CI types with counts plus distinct relationship types
    Types,
    /// Filtered, paginated CI listing
    List { filter: CiFilter, paginator: Paginator },
}

impl GraphQuery {
    /// Short name used in output headings and the `query` field of JSON output
    pub fn name(&self) -> &'static str {
        match self {
            GraphQuery::Graph { .. } => "graph",
            GraphQuery::Tree { .. } => "tree",
            GraphQuery::Path { .. } => "path",
            GraphQuery::Connected { .. } => "connected",
            GraphQuery::Groups { .. } => "groups",
            GraphQuery::Types => "types",
            GraphQuery::List { .. } => "list",
        }
    }
}

/// GraphRequest - request DTO for the query use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Inventory snapshot to load
    pub inventory_path: PathBuf,
    pub query: GraphQuery,
    /// Whether dangling relationships and duplicate CI ids are reported as warnings
    pub warn_integrity: bool,
}

impl GraphRequest {
    pub fn new(inventory_path: PathBuf, query: GraphQuery, warn_integrity: bool) -> Self {
        Self {
            inventory_path,
            query,
            warn_integrity,
        }
    }
}
