use super::*;
use crate::duplication::domain::{ConsolidationStrategy, MatchError, SemanticCategory};
use crate::shared::error::ReportError;
use serde_json::json;
use std::cell::RefCell;

// Mock implementations for testing
struct MockInputReader {
    content: String,
}

impl MockInputReader {
    fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl InputReader for MockInputReader {
    fn read_input(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

struct FailingInputReader;

impl InputReader for FailingInputReader {
    fn read_input(&self) -> Result<String> {
        anyhow::bail!("stdin closed")
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    progress: RefCell<Vec<(usize, usize)>>,
    completions: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.progress.borrow_mut().push((current, total));
    }

    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.completions.borrow_mut().push(message.to_string());
    }
}

fn matched(rule_id: &str, file_path: &str, line_start: u64, line_end: u64, text: &str) -> Value {
    json!({
        "rule_id": rule_id,
        "file_path": file_path,
        "line_start": line_start,
        "line_end": line_end,
        "matched_text": text,
    })
}

fn request_json(matches: Vec<Value>) -> String {
    json!({
        "repository_info": {"path": "/repo", "name": "repo"},
        "pattern_matches": matches,
    })
    .to_string()
}

fn run_with(
    reporter: &MockProgressReporter,
    config: PipelineConfig,
    matches: Vec<Value>,
) -> AnalysisResponse {
    let use_case = AnalyzeDuplicationUseCase::new(
        MockInputReader::new(request_json(matches)),
        reporter,
        config,
    );
    use_case.execute().unwrap()
}

const VALIDATION: &str = "if (!user.email) { throw new Error('x'); }";

#[test]
fn test_execute_groups_identical_blocks() {
    let reporter = MockProgressReporter::default();
    let response = run_with(
        &reporter,
        PipelineConfig::default(),
        vec![
            matched("request-validation", "a.js", 10, 10, VALIDATION),
            matched("request-validation", "b.js", 20, 20, VALIDATION),
            matched("request-validation", "c.js", 30, 30, VALIDATION),
        ],
    );
    let report = response.report;

    assert!(response.skipped.is_empty());
    assert_eq!(report.code_blocks.len(), 3);
    assert_eq!(report.duplicate_groups.len(), 1);
    assert_eq!(report.suggestions.len(), 1);

    let group = &report.duplicate_groups[0];
    assert_eq!(group.occurrence_count(), 3);
    assert_eq!(group.category(), SemanticCategory::Validator);
    assert_eq!(group.affected_files(), ["a.js", "b.js", "c.js"]);

    let suggestion = &report.suggestions[0];
    assert_eq!(suggestion.strategy, ConsolidationStrategy::LocalUtil);
    assert_eq!(suggestion.duplicate_group_id, group.group_id());
    assert_eq!(suggestion.confidence, 0.9);

    assert_eq!(report.metrics.total_code_blocks, 3);
    assert_eq!(report.metrics.total_duplicate_groups, 1);
    assert_eq!(report.metrics.exact_duplicates, 1);
    assert_eq!(report.metrics.total_duplicated_lines, 3);
    assert_eq!(report.metrics.potential_loc_reduction, 2);
    assert_eq!(report.metrics.total_suggestions, 1);
}

#[test]
fn test_execute_skips_invalid_records() {
    let reporter = MockProgressReporter::default();
    let response = run_with(
        &reporter,
        PipelineConfig::default(),
        vec![
            matched("validation", "a.js", 1, 2, "x"),
            json!({"rule_id": "validation", "line_start": 4}),
            json!({"rule_id": "validation", "file_path": "c.js", "line_start": 9, "line_end": 3}),
        ],
    );

    assert_eq!(response.report.code_blocks.len(), 1);
    assert_eq!(response.skipped.len(), 2);
    assert_eq!(response.skipped[0].index, 1);
    assert_eq!(response.skipped[0].file_path, "unknown");
    assert_eq!(
        response.skipped[0].error,
        MatchError::MissingField("file_path")
    );
    assert_eq!(response.skipped[1].file_path, "c.js");

    let warnings = reporter.warnings.borrow();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("Failed to extract block 1 from unknown"));
    assert!(warnings[1].contains("Failed to extract block 2 from c.js"));
}

#[test]
fn test_execute_no_duplicates() {
    let reporter = MockProgressReporter::default();
    let response = run_with(
        &reporter,
        PipelineConfig::default(),
        vec![
            matched("validation", "a.js", 1, 1, "one()"),
            matched("validation", "b.js", 1, 1, "two()"),
        ],
    );

    assert_eq!(response.report.code_blocks.len(), 2);
    assert!(response.report.duplicate_groups.is_empty());
    assert!(response.report.suggestions.is_empty());
    assert_eq!(response.report.metrics.potential_loc_reduction, 0);
}

#[test]
fn test_execute_empty_batch() {
    let reporter = MockProgressReporter::default();
    let response = run_with(&reporter, PipelineConfig::default(), vec![]);

    assert!(response.report.code_blocks.is_empty());
    assert_eq!(response.report.metrics.total_code_blocks, 0);
    assert_eq!(reporter.completions.borrow().len(), 1);
}

#[test]
fn test_execute_reports_progress_per_record() {
    let reporter = MockProgressReporter::default();
    run_with(
        &reporter,
        PipelineConfig::default(),
        vec![
            matched("validation", "a.js", 1, 1, "x"),
            json!("not an object"),
        ],
    );

    assert_eq!(*reporter.progress.borrow(), vec![(1, 2), (2, 2)]);
    assert!(reporter.completions.borrow()[0].contains("Analysis of repo complete"));
}

#[test]
fn test_execute_uses_configured_thresholds() {
    let reporter = MockProgressReporter::default();
    let config = PipelineConfig {
        local_util_max: 1,
        ..PipelineConfig::default()
    };
    let response = run_with(
        &reporter,
        config,
        vec![
            matched("validation", "a.js", 1, 1, VALIDATION),
            matched("validation", "b.js", 1, 1, VALIDATION),
        ],
    );

    assert_eq!(
        response.report.suggestions[0].strategy,
        ConsolidationStrategy::SharedPackage
    );
}

#[test]
fn test_execute_uses_configured_default_language() {
    let reporter = MockProgressReporter::default();
    let config = PipelineConfig {
        default_language: "unknown".to_string(),
        ..PipelineConfig::default()
    };
    let response = run_with(
        &reporter,
        config,
        vec![
            matched("validation", "script", 1, 1, "x"),
            matched("validation", "lib.py", 1, 1, "y"),
        ],
    );

    assert_eq!(response.report.code_blocks[0].language(), "unknown");
    assert_eq!(response.report.code_blocks[1].language(), "python");
}

#[test]
fn test_execute_is_deterministic() {
    let matches = vec![
        matched("validation", "a.js", 1, 3, "a\nb\nc"),
        matched("validation", "b.js", 5, 7, "a\nb\nc"),
        matched("validation", "c.js", 1, 1, "d"),
    ];
    let first = run_with(
        &MockProgressReporter::default(),
        PipelineConfig::default(),
        matches.clone(),
    );
    let second = run_with(
        &MockProgressReporter::default(),
        PipelineConfig::default(),
        matches,
    );

    assert_eq!(first.report, second.report);
}

#[test]
fn test_execute_invalid_input_is_error() {
    let reporter = MockProgressReporter::default();
    let use_case = AnalyzeDuplicationUseCase::new(
        MockInputReader::new("{\"pattern_matches\": []}"),
        &reporter,
        PipelineConfig::default(),
    );

    let err = use_case.execute().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::MissingInputKey { .. })
    ));
    assert!(reporter.completions.borrow().is_empty());
}

#[test]
fn test_execute_read_failure_is_error() {
    let reporter = MockProgressReporter::default();
    let use_case =
        AnalyzeDuplicationUseCase::new(FailingInputReader, &reporter, PipelineConfig::default());

    let err = use_case.execute().unwrap_err();
    assert!(err.to_string().contains("stdin closed"));
}

#[test]
fn test_analyze_port_delegates_to_execute() {
    let reporter = MockProgressReporter::default();
    let use_case = AnalyzeDuplicationUseCase::new(
        MockInputReader::new(request_json(vec![matched("validation", "a.js", 1, 1, "x")])),
        &reporter,
        PipelineConfig::default(),
    );

    let port: &dyn DuplicationAnalysisPort = &use_case;
    let response = port.analyze().unwrap();
    assert_eq!(response.report.code_blocks.len(), 1);
}
