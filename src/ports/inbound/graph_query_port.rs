use crate::application::dto::{GraphRequest, GraphResponse};
use crate::shared::Result;

/// GraphQueryPort - Inbound port for answering graph queries over an inventory
///
/// Implemented by the query use case; the CLI drives it.
pub trait GraphQueryPort {
    /// Loads the inventory named by the request and answers its query
    ///
    /// # Errors
    /// Returns an error if the inventory cannot be read, parsed or validated.
    /// An empty answer (no path, unknown root) is not an error; see
    /// [`QueryOutcome::is_empty_result`](crate::application::dto::QueryOutcome::is_empty_result).
    fn query(&self, request: GraphRequest) -> Result<GraphResponse>;
}
