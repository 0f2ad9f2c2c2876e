use serde::Serialize;
use std::fmt;

/// Semantic role of a matched code fragment
///
/// Closed set: every block carries exactly one of these. Pattern rules that
/// are not known to the classifier land in `Utility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticCategory {
    #[default]
    Utility,
    Validator,
    ApiHandler,
    AuthCheck,
    ErrorHandler,
    DatabaseOperation,
    AsyncPattern,
    ConfigAccess,
    Logger,
}

impl SemanticCategory {
    /// Wire name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticCategory::Utility => "utility",
            SemanticCategory::Validator => "validator",
            SemanticCategory::ApiHandler => "api_handler",
            SemanticCategory::AuthCheck => "auth_check",
            SemanticCategory::ErrorHandler => "error_handler",
            SemanticCategory::DatabaseOperation => "database_operation",
            SemanticCategory::AsyncPattern => "async_pattern",
            SemanticCategory::ConfigAccess => "config_access",
            SemanticCategory::Logger => "logger",
        }
    }
}

impl fmt::Display for SemanticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utility() {
        assert_eq!(SemanticCategory::default(), SemanticCategory::Utility);
    }

    #[test]
    fn test_serialized_form_matches_as_str() {
        for category in [
            SemanticCategory::Utility,
            SemanticCategory::Validator,
            SemanticCategory::ApiHandler,
            SemanticCategory::AuthCheck,
            SemanticCategory::ErrorHandler,
            SemanticCategory::DatabaseOperation,
            SemanticCategory::AsyncPattern,
            SemanticCategory::ConfigAccess,
            SemanticCategory::Logger,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SemanticCategory::DatabaseOperation.to_string(), "database_operation");
    }
}
