use crate::duplication::domain::DuplicationReport;
use crate::duplication::services::ExtractionFailure;

/// AnalysisResponse - result of one analysis run
///
/// `skipped` lists the match records that were dropped, in input order.
/// They are already reported as warnings; callers only need them for
/// inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub report: DuplicationReport,
    pub skipped: Vec<ExtractionFailure>,
}

impl AnalysisResponse {
    pub fn new(report: DuplicationReport, skipped: Vec<ExtractionFailure>) -> Self {
        Self { report, skipped }
    }
}
