use super::{CodeBlock, ConsolidationSuggestion, DuplicateGroup, ScanMetrics};
use serde::Serialize;

/// The complete output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicationReport {
    pub code_blocks: Vec<CodeBlock>,
    pub duplicate_groups: Vec<DuplicateGroup>,
    pub suggestions: Vec<ConsolidationSuggestion>,
    pub metrics: ScanMetrics,
}

impl DuplicationReport {
    /// Looks up a block by id
    pub fn block(&self, block_id: &str) -> Option<&CodeBlock> {
        self.code_blocks.iter().find(|b| b.block_id() == block_id)
    }

    /// Looks up the suggestion made for a group
    pub fn suggestion_for(&self, group_id: &str) -> Option<&ConsolidationSuggestion> {
        self.suggestions
            .iter()
            .find(|s| s.duplicate_group_id == group_id)
    }
}
