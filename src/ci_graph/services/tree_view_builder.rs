use super::{EntityIndex, RelationshipIndex};
use crate::ci_graph::domain::{ConfigurationItem, CycleEdge, Relationship, TreeNode, TreeView};

/// TreeViewBuilder service producing a rooted hierarchy along outgoing edges
///
/// The tree is expanded with an explicit work stack instead of recursion.
/// Every pending node remembers its parent, so an edge pointing back at an
/// ancestor of the current branch is detected and reported as a
/// [`CycleEdge`] instead of being followed. A CI may still appear in several
/// branches.
pub struct TreeViewBuilder;

/// Arena slot used while expanding
struct Slot<'a> {
    node: TreeNode,
    ci: &'a ConfigurationItem,
    parent: Option<usize>,
}

impl TreeViewBuilder {
    /// Maximum number of tree nodes built for one root.
    /// Deeply diamond-shaped DAGs can blow up exponentially when unfolded.
    pub const MAX_TREE_NODES: usize = 100_000;

    /// Deepest level expanded below the root.
    /// Rendering and serialization walk the tree one level per call.
    pub const MAX_TREE_DEPTH: usize = 256;

    /// Builds the tree rooted at `root_id`
    ///
    /// # Returns
    /// `None` when `root_id` is not a known CI. Edges whose target has no CI
    /// record are pruned silently.
    pub fn build(
        cis: &[ConfigurationItem],
        relationships: &[Relationship],
        root_id: &str,
    ) -> Option<TreeView> {
        Self::build_with_limits(
            cis,
            relationships,
            root_id,
            Self::MAX_TREE_NODES,
            Self::MAX_TREE_DEPTH,
        )
    }

    /// Same as [`build`](Self::build) with custom node and depth budgets.
    /// Hitting either budget sets [`TreeView::truncated`].
    pub fn build_with_limits(
        cis: &[ConfigurationItem],
        relationships: &[Relationship],
        root_id: &str,
        max_nodes: usize,
        max_depth: usize,
    ) -> Option<TreeView> {
        let entities = EntityIndex::build(cis);
        let adjacency = RelationshipIndex::build(relationships);

        let root = entities.get(root_id)?;

        let mut arena: Vec<Slot> = vec![Slot {
            node: Self::make_node(root, 0, None),
            ci: root,
            parent: None,
        }];
        let mut stack: Vec<usize> = vec![0];
        let mut cycles = Vec::new();
        let mut truncated = false;

        while let Some(index) = stack.pop() {
            let current = arena[index].ci;
            let depth = arena[index].node.depth;

            for rel in adjacency.outgoing(current.id()) {
                let Some(child) = entities.get(rel.target_id()) else {
                    continue;
                };

                if Self::is_on_branch(&arena, index, child.id()) {
                    cycles.push(CycleEdge {
                        relationship_id: rel.id().to_string(),
                        from: current.id().to_string(),
                        to: child.id().to_string(),
                    });
                    continue;
                }

                if arena.len() >= max_nodes || depth >= max_depth {
                    truncated = true;
                    break;
                }

                arena.push(Slot {
                    node: Self::make_node(child, depth + 1, Some(rel)),
                    ci: child,
                    parent: Some(index),
                });
                stack.push(arena.len() - 1);
            }
        }

        Some(TreeView {
            root: Self::assemble(arena)?,
            cycles,
            truncated,
        })
    }

    fn make_node(ci: &ConfigurationItem, depth: usize, via: Option<&Relationship>) -> TreeNode {
        TreeNode {
            id: ci.id().to_string(),
            name: ci.name().to_string(),
            ci_type: ci.ci_type().to_string(),
            depth,
            children: Vec::new(),
            relationship_type: via.map(|rel| rel.relationship_type().to_string()),
            relationship_id: via.map(|rel| rel.id().to_string()),
        }
    }

    /// Walks the parent chain from `index` looking for `id`
    fn is_on_branch(arena: &[Slot], index: usize, id: &str) -> bool {
        let mut cursor = Some(index);
        while let Some(i) = cursor {
            if arena[i].ci.id() == id {
                return true;
            }
            cursor = arena[i].parent;
        }
        false
    }

    /// Folds the arena into nested nodes.
    ///
    /// Children are always pushed after their parent and siblings are pushed
    /// in edge order, so walking the arena backwards attaches every child
    /// before its parent is moved. Siblings arrive reversed and are flipped
    /// once the node is complete.
    fn assemble(arena: Vec<Slot>) -> Option<TreeNode> {
        let mut parents: Vec<Option<usize>> = arena.iter().map(|slot| slot.parent).collect();
        let mut nodes: Vec<Option<TreeNode>> = arena.into_iter().map(|slot| Some(slot.node)).collect();

        for index in (1..nodes.len()).rev() {
            let Some(mut node) = nodes[index].take() else {
                continue;
            };
            node.children.reverse();
            if let Some(parent) = parents[index].take() {
                if let Some(parent_node) = nodes[parent].as_mut() {
                    parent_node.children.push(node);
                }
            }
        }

        let mut root = nodes.into_iter().next().flatten()?;
        root.children.reverse();
        Some(root)
    }
}
