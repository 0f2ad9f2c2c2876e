use crate::duplication::domain::{
    Complexity, ConsolidationStrategy, ConsolidationSuggestion, DuplicateGroup, MigrationRisk,
};
use crate::duplication::policies::SuggestionPolicy;
use std::path::{Component, Path, PathBuf};

/// SuggestionGenerator service producing one remediation per duplicate group
#[derive(Debug, Clone, Default)]
pub struct SuggestionGenerator {
    policy: SuggestionPolicy,
}

impl SuggestionGenerator {
    pub fn new(policy: SuggestionPolicy) -> Self {
        Self { policy }
    }

    pub fn generate(&self, groups: &[DuplicateGroup]) -> Vec<ConsolidationSuggestion> {
        groups.iter().map(|group| self.suggest(group)).collect()
    }

    /// Builds the suggestion for a single group
    ///
    /// Deterministic: the same group always yields the same suggestion.
    pub fn suggest(&self, group: &DuplicateGroup) -> ConsolidationSuggestion {
        let strategy = self.policy.strategy_for(group.occurrence_count());
        let affected_files_count = group.affected_files().len();

        ConsolidationSuggestion {
            suggestion_id: format!("cs_{}", group.group_id()),
            duplicate_group_id: group.group_id().to_string(),
            strategy,
            strategy_rationale: format!(
                "Found {} occurrences in {} files",
                group.occurrence_count(),
                affected_files_count
            ),
            target_location: Self::target_location(strategy, group),
            migration_steps: Self::migration_steps(strategy),
            impact_score: self.policy.cap_impact(group.impact_score()),
            complexity: Complexity::Simple,
            migration_risk: MigrationRisk::Low,
            breaking_changes: false,
            affected_files_count,
            affected_repositories_count: group.affected_repositories().len(),
            confidence: self.policy.confidence_for(group.similarity_score()),
        }
    }

    /// Suggested home for the consolidated code
    fn target_location(strategy: ConsolidationStrategy, group: &DuplicateGroup) -> String {
        match strategy {
            ConsolidationStrategy::LocalUtil => {
                let parent = common_parent(group.affected_files());
                if parent.as_os_str().is_empty() {
                    "utils".to_string()
                } else {
                    format!("{}/utils", parent.to_string_lossy().replace('\\', "/"))
                }
            }
            ConsolidationStrategy::SharedPackage => {
                format!("packages/shared-{}", group.category().as_str().replace('_', "-"))
            }
            ConsolidationStrategy::McpServer => {
                format!("services/{}-service", group.category().as_str().replace('_', "-"))
            }
        }
    }

    fn migration_steps(strategy: ConsolidationStrategy) -> Vec<String> {
        let steps: &[&str] = match strategy {
            ConsolidationStrategy::LocalUtil => &[
                "Extract the duplicated code into a helper function in the target location",
                "Replace each occurrence with a call to the helper",
                "Run the affected tests",
            ],
            ConsolidationStrategy::SharedPackage => &[
                "Create a shared package in the target location",
                "Move the duplicated code into the package and export it",
                "Add the package as a dependency of every affected module",
                "Replace each occurrence with an import from the package",
                "Run the test suites of all affected modules",
            ],
            ConsolidationStrategy::McpServer => &[
                "Define a service interface covering the duplicated behaviour",
                "Implement the service in the target location",
                "Deploy the service and expose it to consumers",
                "Replace each occurrence with a call to the service",
                "Monitor callers during rollout and remove the old copies",
            ],
        };
        steps.iter().map(|s| s.to_string()).collect()
    }
}

/// Longest directory prefix shared by every file in `files`
fn common_parent(files: &[String]) -> PathBuf {
    let mut dirs = files.iter().map(|f| {
        Path::new(f)
            .parent()
            .map(|p| p.components().collect::<Vec<_>>())
            .unwrap_or_default()
    });

    let Some(mut common) = dirs.next() else {
        return PathBuf::new();
    };
    for dir in dirs {
        let shared = common
            .iter()
            .zip(dir.iter())
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    common
        .into_iter()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}
