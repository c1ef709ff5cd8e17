use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating query answer formatters
///
/// Selection of the concrete adapter lives here so the CLI only deals in
/// `OutputFormat` values.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cmdb_graph::application::dto::OutputFormat;
    /// use cmdb_graph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use cmdb_graph::application::dto::OutputFormat;
    /// use cmdb_graph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON output...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
