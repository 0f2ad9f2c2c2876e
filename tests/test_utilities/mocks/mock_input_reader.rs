use dupe_report::prelude::*;
use serde_json::{json, Value};

/// Mock InputReader serving a fixed request document
#[derive(Clone)]
pub struct MockInputReader {
    content: String,
}

impl MockInputReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Builds a well-formed request for `repository_path` with the given records
    pub fn with_matches(repository_path: &str, pattern_matches: Vec<Value>) -> Self {
        Self::new(
            json!({
                "repository_info": {"path": repository_path},
                "pattern_matches": pattern_matches,
            })
            .to_string(),
        )
    }
}

impl InputReader for MockInputReader {
    fn read_input(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}
