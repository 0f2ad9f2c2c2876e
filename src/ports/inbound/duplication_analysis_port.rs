use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// DuplicationAnalysisPort - Inbound port for the report use case
///
/// This port defines the interface that external adapters (CLI, tests)
/// use to trigger a duplication analysis run.
pub trait DuplicationAnalysisPort {
    /// Reads one batch of pattern matches and analyzes it
    ///
    /// # Returns
    /// The finished report plus the records that had to be skipped
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input cannot be read
    /// - The input is not valid JSON or lacks a required top-level key
    fn analyze(&self) -> Result<AnalysisResponse>;
}
