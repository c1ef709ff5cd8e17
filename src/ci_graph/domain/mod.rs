pub mod configuration_item;
pub mod graph_view;
pub mod inventory;
pub mod query_metadata;
pub mod relationship;
pub mod tree_node;

pub use configuration_item::{CiId, ConfigurationItem};
pub use graph_view::{GraphLink, GraphNode, GraphView};
pub use inventory::{Categorized, Inventory};
pub use query_metadata::QueryMetadata;
pub use relationship::Relationship;
pub use tree_node::{CycleEdge, TreeNode, TreeView};
