use crate::adapters::outbound::formatters::{JsonFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;
use std::io::IsTerminal;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for the requested output format. The table
/// formatter is colored only when stdout is attached to a terminal, so piped
/// output stays plain.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pip_orphans::application::dto::OutputFormat;
    /// use pip_orphans::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        Self::create_with_colors(format, std::io::stdout().is_terminal())
    }

    /// Creates a formatter with explicit control over table coloring
    pub fn create_with_colors(format: OutputFormat, colored: bool) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::with_colors(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pip_orphans::application::dto::OutputFormat;
    /// use pip_orphans::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Generating package table...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}
