//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that flatten a query answer for the formatters.

mod query_read_model;
mod query_read_model_builder;
mod views;

pub use query_read_model::{MetadataView, QueryReadModel, ResultView, SummaryView};
pub use query_read_model_builder::QueryReadModelBuilder;
pub use views::{
    CiView, CycleView, GroupItemView, GroupView, LinkView, NodeView, RelationshipView,
    TreeNodeView, TypeCountView,
};
