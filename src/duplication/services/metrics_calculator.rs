use crate::duplication::domain::{
    CodeBlock, Complexity, ConsolidationSuggestion, DuplicateGroup, ScanMetrics, SimilarityMethod,
};

/// Impact score from which a suggestion counts as high priority
pub const DEFAULT_HIGH_PRIORITY_IMPACT: f64 = 75.0;

/// MetricsCalculator service summarizing a finished run
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    high_priority_impact: f64,
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_PRIORITY_IMPACT)
    }
}

impl MetricsCalculator {
    pub fn new(high_priority_impact: f64) -> Self {
        Self {
            high_priority_impact,
        }
    }

    pub fn calculate(
        &self,
        blocks: &[CodeBlock],
        groups: &[DuplicateGroup],
        suggestions: &[ConsolidationSuggestion],
    ) -> ScanMetrics {
        let count_method =
            |method: SimilarityMethod| groups.iter().filter(|g| g.similarity_method() == method).count();

        ScanMetrics {
            total_code_blocks: blocks.len(),
            total_duplicate_groups: groups.len(),
            exact_duplicates: count_method(SimilarityMethod::ExactMatch),
            structural_duplicates: count_method(SimilarityMethod::Structural),
            semantic_duplicates: count_method(SimilarityMethod::Semantic),
            total_duplicated_lines: saturating_sum(groups.iter().map(|g| g.total_lines())),
            potential_loc_reduction: saturating_sum(
                groups.iter().map(|g| g.potential_loc_reduction()),
            ),
            duplication_percentage: 0.0,
            total_suggestions: suggestions.len(),
            quick_wins: suggestions
                .iter()
                .filter(|s| s.complexity == Complexity::Trivial)
                .count(),
            high_priority_suggestions: suggestions
                .iter()
                .filter(|s| s.impact_score >= self.high_priority_impact)
                .count(),
        }
    }
}

fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}
