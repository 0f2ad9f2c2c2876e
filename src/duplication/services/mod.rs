mod block_extractor;
mod duplicate_grouper;
mod metrics_calculator;
mod suggestion_generator;

pub use block_extractor::{BlockExtractor, ExtractionBatch, ExtractionFailure, DEFAULT_LANGUAGE};
pub use duplicate_grouper::DuplicateGrouper;
pub use metrics_calculator::{MetricsCalculator, DEFAULT_HIGH_PRIORITY_IMPACT};
pub use suggestion_generator::SuggestionGenerator;
