use crate::duplication::domain::DuplicationReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a finished report
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &DuplicationReport) -> Result<String>;
}
