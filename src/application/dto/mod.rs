/// Data Transfer Objects for application layer
///
/// DTOs carry a query from the CLI into the use case and the answer back out,
/// keeping the domain layer isolated from both.
mod graph_request;
mod graph_response;
mod output_format;

pub use graph_request::{GraphQuery, GraphRequest, GroupTarget};
pub use graph_response::{GraphResponse, QueryOutcome};
pub use output_format::OutputFormat;
