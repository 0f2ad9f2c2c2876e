use serde::Serialize;
use std::fmt;

/// Where duplicated code should be consolidated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsolidationStrategy {
    /// Extract into a helper next to the callers
    LocalUtil,
    /// Extract into a package shared across modules
    SharedPackage,
    /// Move behind a centralized service
    McpServer,
}

impl fmt::Display for ConsolidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsolidationStrategy::LocalUtil => write!(f, "local_util"),
            ConsolidationStrategy::SharedPackage => write!(f, "shared_package"),
            ConsolidationStrategy::McpServer => write!(f, "mcp_server"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Trivial,
    Simple,
    Moderate,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MigrationRisk {
    Low,
    Medium,
    High,
}

/// ConsolidationSuggestion value object: the remediation for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidationSuggestion {
    pub suggestion_id: String,
    pub duplicate_group_id: String,
    pub strategy: ConsolidationStrategy,
    pub strategy_rationale: String,
    pub target_location: String,
    pub migration_steps: Vec<String>,
    pub impact_score: f64,
    pub complexity: Complexity,
    pub migration_risk: MigrationRisk,
    pub breaking_changes: bool,
    pub affected_files_count: usize,
    pub affected_repositories_count: usize,
    pub confidence: f64,
}
