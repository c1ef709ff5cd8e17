mod ci_filter;
mod connectivity_finder;
mod entity_index;
mod graph_view_builder;
mod grouping;
mod integrity_checker;
mod metadata_generator;
mod neighborhood_expander;
mod path_finder;
mod relationship_index;
mod tree_view_builder;

pub use ci_filter::{CiFilter, CiPage, Paginator};
pub use connectivity_finder::ConnectivityFinder;
pub use entity_index::EntityIndex;
pub use graph_view_builder::GraphViewBuilder;
pub use grouping::Grouping;
pub use integrity_checker::{DanglingRelationship, IntegrityChecker, IntegrityReport};
pub use metadata_generator::MetadataGenerator;
pub use neighborhood_expander::NeighborhoodExpander;
pub use path_finder::PathFinder;
pub use relationship_index::RelationshipIndex;
pub use tree_view_builder::TreeViewBuilder;
