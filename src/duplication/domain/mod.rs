pub mod code_block;
pub mod consolidation_suggestion;
pub mod duplicate_group;
pub mod raw_match;
pub mod report;
pub mod repository_info;
pub mod scan_metrics;
pub mod semantic_category;

pub use code_block::{CodeBlock, SourceLocation};
pub use consolidation_suggestion::{
    Complexity, ConsolidationStrategy, ConsolidationSuggestion, MigrationRisk,
};
pub use duplicate_group::{DuplicateGroup, SimilarityMethod};
pub use raw_match::{MatchError, RawMatch};
pub use report::DuplicationReport;
pub use repository_info::RepositoryInfo;
pub use scan_metrics::ScanMetrics;
pub use semantic_category::SemanticCategory;
