use crate::duplication::domain::{
    CodeBlock, MatchError, RawMatch, RepositoryInfo, SourceLocation,
};
use crate::duplication::policies::{CategoryMapping, LanguageDetection};
use serde_json::Value;

/// Language assumed for files whose extension is not recognised
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// A match record that was skipped, with enough context to report it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    /// Position of the record in `pattern_matches`
    pub index: usize,
    /// File path of the record, or "unknown"
    pub file_path: String,
    pub error: MatchError,
}

/// Outcome of extracting a whole batch: both lists keep input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionBatch {
    pub blocks: Vec<CodeBlock>,
    pub failures: Vec<ExtractionFailure>,
}

/// BlockExtractor service turning raw pattern matches into code blocks
///
/// Each record is validated and converted on its own; a bad record becomes
/// an `ExtractionFailure` and never stops the rest of the batch.
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    default_language: String,
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl BlockExtractor {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
        }
    }

    /// Extracts every record of `matches`
    ///
    /// # Arguments
    /// * `matches` - Untyped match records, in the order the engine reported them
    /// * `repository` - Descriptor of the scanned repository
    /// * `on_progress` - Called after each record with (processed, total)
    pub fn extract<F>(
        &self,
        matches: &[Value],
        repository: &RepositoryInfo,
        mut on_progress: F,
    ) -> ExtractionBatch
    where
        F: FnMut(usize, usize),
    {
        let total = matches.len();
        let mut batch = ExtractionBatch::default();

        for (index, value) in matches.iter().enumerate() {
            match self.extract_one(index, value, repository) {
                Ok(block) => batch.blocks.push(block),
                Err(failure) => batch.failures.push(failure),
            }
            on_progress(index + 1, total);
        }

        batch
    }

    /// Extracts a single record
    pub fn extract_one(
        &self,
        index: usize,
        value: &Value,
        repository: &RepositoryInfo,
    ) -> Result<CodeBlock, ExtractionFailure> {
        self.build_block(value, repository)
            .map_err(|error| ExtractionFailure {
                index,
                file_path: RawMatch::file_path_hint(value).to_string(),
                error,
            })
    }

    fn build_block(
        &self,
        value: &Value,
        repository: &RepositoryInfo,
    ) -> Result<CodeBlock, MatchError> {
        let raw = RawMatch::parse(value)?;

        let category = CategoryMapping::category_for(&raw.rule_id);
        let language = LanguageDetection::detect(&raw.file_path, &self.default_language);
        let language = language.to_string();
        let location = SourceLocation::new(raw.file_path, raw.line_start, raw.line_end)?;

        Ok(CodeBlock::new(
            raw.rule_id,
            location,
            raw.matched_text,
            language,
            category,
            repository.path.clone(),
        ))
    }
}
