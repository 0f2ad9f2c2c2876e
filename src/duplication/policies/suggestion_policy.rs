use crate::duplication::domain::ConsolidationStrategy;

/// SuggestionPolicy for choosing how a duplicate group gets consolidated
///
/// Strategy thresholds are applied in order, first match wins:
/// 1. `occurrence_count <= local_util_max` - local utility
/// 2. `occurrence_count <= shared_package_max` - shared package
/// 3. anything larger - centralized service
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPolicy {
    pub local_util_max: usize,
    pub shared_package_max: usize,
    pub high_confidence_similarity: f64,
    pub high_confidence: f64,
    pub low_confidence: f64,
    pub max_impact_score: f64,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        Self {
            local_util_max: 3,
            shared_package_max: 10,
            high_confidence_similarity: 0.95,
            high_confidence: 0.9,
            low_confidence: 0.7,
            max_impact_score: 100.0,
        }
    }
}

impl SuggestionPolicy {
    pub fn strategy_for(&self, occurrence_count: usize) -> ConsolidationStrategy {
        if occurrence_count <= self.local_util_max {
            ConsolidationStrategy::LocalUtil
        } else if occurrence_count <= self.shared_package_max {
            ConsolidationStrategy::SharedPackage
        } else {
            ConsolidationStrategy::McpServer
        }
    }

    /// Confidence in a suggestion given how similar the group members are
    pub fn confidence_for(&self, similarity_score: f64) -> f64 {
        if similarity_score >= self.high_confidence_similarity {
            self.high_confidence
        } else {
            self.low_confidence
        }
    }

    pub fn cap_impact(&self, impact_score: f64) -> f64 {
        impact_score.min(self.max_impact_score)
    }
}
