use crate::duplication::domain::DuplicationReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// JsonReportFormatter adapter rendering the report as JSON
///
/// Produces the document downstream tooling consumes: `code_blocks`,
/// `duplicate_groups`, `suggestions` and `metrics` at the top level,
/// pretty-printed with two-space indentation.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &DuplicationReport) -> Result<String> {
        let json = serde_json::to_string_pretty(report).map_err(|e| ReportError::OutputError {
            details: format!("Failed to serialize report to JSON: {}", e),
        })?;
        Ok(json)
    }
}
