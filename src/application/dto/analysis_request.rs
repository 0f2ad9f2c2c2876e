use crate::duplication::domain::RepositoryInfo;
use crate::shared::error::ReportError;
use crate::shared::Result;
use serde_json::Value;

/// AnalysisRequest - validated top level of the input document
///
/// The repository descriptor is fully typed here. Match records stay
/// untyped so that one malformed record can be skipped by the extractor
/// instead of rejecting the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub repository_info: RepositoryInfo,
    pub pattern_matches: Vec<Value>,
}

impl AnalysisRequest {
    pub fn new(repository_info: RepositoryInfo, pattern_matches: Vec<Value>) -> Self {
        Self {
            repository_info,
            pattern_matches,
        }
    }

    /// Parses the raw input document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The content is not valid JSON or not a JSON object
    /// - `repository_info` or `pattern_matches` is missing
    /// - `repository_info` has no string `path`
    /// - `pattern_matches` is not an array
    pub fn from_json(content: &str) -> Result<Self> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| ReportError::InvalidInput {
                details: e.to_string(),
            })?;

        let Value::Object(mut root) = document else {
            return Err(ReportError::InvalidInput {
                details: "top-level value must be a JSON object".to_string(),
            }
            .into());
        };

        let repository_info = root
            .remove("repository_info")
            .ok_or(ReportError::MissingInputKey {
                key: "repository_info",
            })?;
        let pattern_matches = root
            .remove("pattern_matches")
            .ok_or(ReportError::MissingInputKey {
                key: "pattern_matches",
            })?;

        let repository_info: RepositoryInfo =
            serde_json::from_value(repository_info).map_err(|e| ReportError::InvalidInput {
                details: format!("repository_info: {}", e),
            })?;

        let Value::Array(pattern_matches) = pattern_matches else {
            return Err(ReportError::InvalidInput {
                details: "pattern_matches must be an array".to_string(),
            }
            .into());
        };

        Ok(Self::new(repository_info, pattern_matches))
    }
}
