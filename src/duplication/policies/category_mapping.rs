use crate::duplication::domain::SemanticCategory;

/// CategoryMapping policy for classifying pattern rules
///
/// Maps the identifier of the rule that produced a match to the semantic
/// role of the matched code. The rule set is fixed; identifiers it does not
/// know fall back to `SemanticCategory::Utility` instead of failing.
pub struct CategoryMapping;

impl CategoryMapping {
    /// Returns the category for a pattern rule identifier
    ///
    /// # Arguments
    /// * `rule_id` - Identifier of the rule that matched (e.g. "auth-checks")
    pub fn category_for(rule_id: &str) -> SemanticCategory {
        match rule_id {
            "object-manipulation" | "array-map-filter" | "string-manipulation"
            | "type-checking" => SemanticCategory::Utility,
            "validation" | "request-validation" => SemanticCategory::Validator,
            "express-route-handlers" => SemanticCategory::ApiHandler,
            "auth-checks" => SemanticCategory::AuthCheck,
            "error-responses" => SemanticCategory::ErrorHandler,
            "prisma-operations" | "query-builders" | "connection-handling" => {
                SemanticCategory::DatabaseOperation
            }
            "await-patterns" | "promise-chains" => SemanticCategory::AsyncPattern,
            "env-variables" | "config-objects" => SemanticCategory::ConfigAccess,
            "console-statements" | "logger-patterns" => SemanticCategory::Logger,
            _ => SemanticCategory::default(),
        }
    }
}
