//! Row-level views shared by the result variants

#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub ci_type: String,
    pub is_root: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub id: String,
    pub source: String,
    pub target: String,
    pub link_type: String,
    pub description: String,
}

/// Tree node with the edge from its parent; `relationship_*` is `None` on the root
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNodeView {
    pub id: String,
    pub name: String,
    pub ci_type: String,
    pub depth: usize,
    pub relationship_type: Option<String>,
    pub relationship_id: Option<String>,
    pub children: Vec<TreeNodeView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CycleView {
    pub relationship_id: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CiView {
    pub id: String,
    pub name: String,
    pub ci_type: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipView {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupItemView {
    Ci(CiView),
    Relationship(RelationshipView),
}

/// All items of one type
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub group_type: String,
    pub items: Vec<GroupItemView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCountView {
    pub type_name: String,
    pub count: usize,
}
