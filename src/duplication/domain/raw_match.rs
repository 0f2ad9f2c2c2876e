use serde_json::{Map, Value};
use thiserror::Error;

/// Why a single pattern match could not become a code block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("match record is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("line_end ({line_end}) is before line_start ({line_start})")]
    InvertedRange { line_start: u64, line_end: u64 },

    #[error("span {line_start}..={line_end} has more lines than can be counted")]
    SpanTooLarge { line_start: u64, line_end: u64 },
}

/// A schema-checked pattern match as reported by the search engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub rule_id: String,
    pub file_path: String,
    pub line_start: u64,
    pub line_end: u64,
    pub matched_text: String,
}

impl RawMatch {
    /// Validates one untyped match record.
    ///
    /// `rule_id`, `file_path` and `line_start` are required. `line_end`
    /// defaults to `line_start` and `matched_text` to the empty string; an
    /// explicit `null` counts as absent for both.
    pub fn parse(value: &Value) -> Result<Self, MatchError> {
        let record = value.as_object().ok_or(MatchError::NotAnObject)?;

        let rule_id = required_str(record, "rule_id")?;
        let file_path = required_str(record, "file_path")?;
        let line_start = required_line(record, "line_start")?;
        let line_end = optional_line(record, "line_end")?.unwrap_or(line_start);
        let matched_text = match record.get("matched_text") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(_) => {
                return Err(MatchError::InvalidField {
                    field: "matched_text",
                    expected: "must be a string",
                })
            }
        };

        Ok(Self {
            rule_id,
            file_path,
            line_start,
            line_end,
            matched_text,
        })
    }

    /// Best-effort file path of a record that may have failed validation
    pub fn file_path_hint(value: &Value) -> &str {
        value
            .get("file_path")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }
}

fn required_str(record: &Map<String, Value>, field: &'static str) -> Result<String, MatchError> {
    match record.get(field) {
        None => Err(MatchError::MissingField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(MatchError::InvalidField {
            field,
            expected: "must be a string",
        }),
    }
}

fn required_line(record: &Map<String, Value>, field: &'static str) -> Result<u64, MatchError> {
    optional_line(record, field)?.ok_or(MatchError::MissingField(field))
}

fn optional_line(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<u64>, MatchError> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or(MatchError::InvalidField {
            field,
            expected: "must be a non-negative integer",
        }),
    }
}
