use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::config::PipelineConfig;
use crate::duplication::domain::{CodeBlock, DuplicateGroup, DuplicationReport, RepositoryInfo};
use crate::duplication::services::{
    BlockExtractor, DuplicateGrouper, ExtractionBatch, MetricsCalculator, SuggestionGenerator,
};
use crate::ports::inbound::DuplicationAnalysisPort;
use crate::ports::outbound::{InputReader, ProgressReporter};
use crate::shared::Result;
use serde_json::Value;

/// AnalyzeDuplicationUseCase - Core use case for the duplication report
///
/// This use case orchestrates the four pipeline stages (extraction,
/// grouping, suggestion, metrics) using generic dependency injection
/// for all infrastructure dependencies.
///
/// # Type Parameters
/// * `IR` - InputReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDuplicationUseCase<IR, PR> {
    input_reader: IR,
    progress_reporter: PR,
    config: PipelineConfig,
}

impl<IR, PR> AnalyzeDuplicationUseCase<IR, PR>
where
    IR: InputReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDuplicationUseCase with injected dependencies
    pub fn new(input_reader: IR, progress_reporter: PR, config: PipelineConfig) -> Self {
        Self {
            input_reader,
            progress_reporter,
            config,
        }
    }

    /// Reads the request from the input port and runs the pipeline on it
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or is not a valid
    /// request. Individual bad match records are skipped, not errors.
    pub fn execute(&self) -> Result<AnalysisResponse> {
        let content = self.input_reader.read_input()?;
        let request = AnalysisRequest::from_json(&content)?;
        Ok(self.run(request))
    }

    /// Runs the pipeline on an already parsed request
    pub fn run(&self, request: AnalysisRequest) -> AnalysisResponse {
        let AnalysisRequest {
            repository_info,
            pattern_matches,
        } = request;

        // Step 1: Extract code blocks, skipping bad records
        let ExtractionBatch { blocks, failures } =
            self.extract_blocks(&pattern_matches, &repository_info);

        // Step 2: Group blocks with identical normalized content
        let groups = self.group_blocks(&blocks);

        // Step 3: Suggest a consolidation for every group
        let suggestions = SuggestionGenerator::new(self.config.suggestion_policy()).generate(&groups);

        // Step 4: Summarize
        let metrics = MetricsCalculator::new(self.config.high_priority_impact)
            .calculate(&blocks, &groups, &suggestions);

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis of {} complete: {} block(s), {} duplicate group(s), {} suggestion(s)",
            repository_info.display_name(),
            metrics.total_code_blocks,
            metrics.total_duplicate_groups,
            metrics.total_suggestions
        ));

        let report = DuplicationReport {
            code_blocks: blocks,
            duplicate_groups: groups,
            suggestions,
            metrics,
        };
        AnalysisResponse::new(report, failures)
    }

    /// Extracts all records, reporting progress and one warning per skipped record
    fn extract_blocks(
        &self,
        pattern_matches: &[Value],
        repository_info: &RepositoryInfo,
    ) -> ExtractionBatch {
        self.progress_reporter.report(&format!(
            "🔍 Extracting code blocks from {} pattern match(es)...",
            pattern_matches.len()
        ));

        let extractor = BlockExtractor::new(self.config.default_language.clone());
        let batch = extractor.extract(pattern_matches, repository_info, |current, total| {
            self.progress_reporter
                .report_progress(current, total, Some("extracting"));
        });

        for failure in &batch.failures {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Failed to extract block {} from {}: {}",
                failure.index, failure.file_path, failure.error
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Extracted {} code block(s), skipped {} record(s)",
            batch.blocks.len(),
            batch.failures.len()
        ));

        batch
    }

    fn group_blocks(&self, blocks: &[CodeBlock]) -> Vec<DuplicateGroup> {
        let groups = DuplicateGrouper::group(blocks);
        self.progress_reporter
            .report(&format!("📦 Found {} duplicate group(s)", groups.len()));
        groups
    }
}

impl<IR, PR> DuplicationAnalysisPort for AnalyzeDuplicationUseCase<IR, PR>
where
    IR: InputReader,
    PR: ProgressReporter,
{
    fn analyze(&self) -> Result<AnalysisResponse> {
        self.execute()
    }
}

#[cfg(test)]
mod tests;
