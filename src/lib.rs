//! cmdb-graph - graph views over CMDB inventory snapshots
//!
//! This library loads configuration items and the relationships between them
//! and derives read-only views: node/link graphs, hierarchy trees, shortest
//! paths, connected sets, type groupings and filtered listings. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`ci_graph`): Pure graph derivations and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cmdb_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let inventory_reader = FileSystemInventoryReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = QueryGraphUseCase::new(inventory_reader, progress_reporter);
//!
//! // Execute
//! let query = GraphQuery::Tree { root: "app-frontend".to_string() };
//! let request = GraphRequest::new(PathBuf::from("cmdb.json"), query, true);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = QueryReadModelBuilder::build(&response);
//! let output = MarkdownFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ci_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemInventoryReader, FileSystemWriter, InventoryFileFormat, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        GraphQuery, GraphRequest, GraphResponse, GroupTarget, OutputFormat, QueryOutcome,
    };
    pub use crate::application::read_models::{QueryReadModel, QueryReadModelBuilder};
    pub use crate::application::use_cases::QueryGraphUseCase;
    pub use crate::ci_graph::domain::{
        CiId, ConfigurationItem, GraphView, Inventory, QueryMetadata, Relationship, TreeNode,
        TreeView,
    };
    pub use crate::ci_graph::services::{
        CiFilter, ConnectivityFinder, GraphViewBuilder, Grouping, IntegrityChecker, Paginator,
        PathFinder, TreeViewBuilder,
    };
    pub use crate::ports::inbound::GraphQueryPort;
    pub use crate::ports::outbound::{
        GraphFormatter, InventoryReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
