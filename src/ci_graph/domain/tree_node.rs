//! Rooted hierarchy fed to tree diagrams.

/// One CI in the hierarchy. `relationship_type`/`relationship_id` describe the
/// edge from the parent and are `None` on the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    pub ci_type: String,
    pub depth: usize,
    pub children: Vec<TreeNode>,
    pub relationship_type: Option<String>,
    pub relationship_id: Option<String>,
}

impl TreeNode {
    /// Number of nodes in this subtree, including self
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Deepest `depth` found in this subtree
    pub fn max_depth(&self) -> usize {
        self.iter().map(|node| node.depth).max().unwrap_or(self.depth)
    }

    /// Pre-order walk over this subtree with an explicit stack
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

/// An outgoing edge that was not followed because its target is already an
/// ancestor on the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEdge {
    pub relationship_id: String,
    pub from: String,
    pub to: String,
}

/// Result of the tree view builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeView {
    pub root: TreeNode,
    pub cycles: Vec<CycleEdge>,
    /// Set when the node or depth budget ran out before the whole tree was expanded
    pub truncated: bool,
}
