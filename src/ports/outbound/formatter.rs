use crate::application::read_models::QueryReadModel;
use crate::shared::Result;

/// GraphFormatter port for rendering a query answer
///
/// Implementations turn the read model into JSON, Markdown, ...
pub trait GraphFormatter {
    /// Formats the answer
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &QueryReadModel) -> Result<String>;
}
