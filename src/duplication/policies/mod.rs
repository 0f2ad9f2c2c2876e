mod category_mapping;
mod language_detection;
mod suggestion_policy;

pub use category_mapping::CategoryMapping;
pub use language_detection::LanguageDetection;
pub use suggestion_policy::SuggestionPolicy;
