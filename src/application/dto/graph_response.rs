use crate::ci_graph::domain::{ConfigurationItem, GraphView, QueryMetadata, Relationship, TreeView};
use crate::ci_graph::services::IntegrityReport;

/// Answer to one [`GraphQuery`](super::GraphQuery), owning everything it shows
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// `view` is empty when `root` names no CI
    Graph {
        root: Option<String>,
        view: GraphView,
    },
    /// `view` is `None` when `root` names no CI
    Tree {
        root: String,
        view: Option<TreeView>,
    },
    /// `path` is empty when no path exists
    Path {
        from: String,
        to: String,
        path: Vec<String>,
    },
    Connected {
        id: String,
        members: Vec<String>,
    },
    CiGroups(Vec<(String, Vec<ConfigurationItem>)>),
    RelationshipGroups(Vec<(String, Vec<Relationship>)>),
    Types {
        ci_types: Vec<(String, usize)>,
        relationship_types: Vec<String>,
    },
    List {
        items: Vec<ConfigurationItem>,
        page: usize,
        limit: usize,
        total: usize,
        total_pages: usize,
    },
}

impl QueryOutcome {
    /// True for answers that say "nothing found": an unknown tree root or a
    /// missing path. The CLI maps these to a distinct exit code.
    pub fn is_empty_result(&self) -> bool {
        match self {
            QueryOutcome::Tree { view, .. } => view.is_none(),
            QueryOutcome::Path { path, .. } => path.is_empty(),
            _ => false,
        }
    }
}

/// GraphResponse - response DTO from the query use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub metadata: QueryMetadata,
    pub ci_count: usize,
    pub relationship_count: usize,
    pub integrity: IntegrityReport,
    pub outcome: QueryOutcome,
}

impl GraphResponse {
    pub fn new(
        metadata: QueryMetadata,
        ci_count: usize,
        relationship_count: usize,
        integrity: IntegrityReport,
        outcome: QueryOutcome,
    ) -> Self {
        Self {
            metadata,
            ci_count,
            relationship_count,
            integrity,
            outcome,
        }
    }
}
