use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the package report
///
/// This port abstracts the formatting logic for the different report
/// formats (console table, JSON).
pub trait ReportFormatter {
    /// Formats the report using the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
