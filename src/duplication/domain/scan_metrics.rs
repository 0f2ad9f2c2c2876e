use serde::Serialize;

/// Aggregate figures for one report run
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScanMetrics {
    pub total_code_blocks: usize,
    pub total_duplicate_groups: usize,
    pub exact_duplicates: usize,
    pub structural_duplicates: usize,
    pub semantic_duplicates: usize,
    pub total_duplicated_lines: u64,
    pub potential_loc_reduction: u64,
    /// Not computed yet: needs the repository's total line count
    pub duplication_percentage: f64,
    pub total_suggestions: usize,
    pub quick_wins: usize,
    pub high_priority_suggestions: usize,
}
