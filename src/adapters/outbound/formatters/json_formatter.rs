use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the read model as pretty-printed JSON with a trailing newline.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
