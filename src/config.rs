//! Configuration file support for dupe-report.
//!
//! Tuning knobs for suggestion strategy, confidence and priority thresholds,
//! loaded from a YAML file given with `--config`. Without a file every value
//! takes its default.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::duplication::policies::SuggestionPolicy;
use crate::duplication::services::{DEFAULT_HIGH_PRIORITY_IMPACT, DEFAULT_LANGUAGE};
use crate::shared::error::ReportError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

/// Pipeline configuration schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Largest group still consolidated into a local utility
    pub local_util_max: usize,
    /// Largest group still consolidated into a shared package
    pub shared_package_max: usize,
    pub high_confidence_similarity: f64,
    pub high_confidence: f64,
    pub low_confidence: f64,
    pub high_priority_impact: f64,
    pub max_impact_score: f64,
    /// Language for files with an unrecognised extension
    pub default_language: String,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let policy = SuggestionPolicy::default();
        Self {
            local_util_max: policy.local_util_max,
            shared_package_max: policy.shared_package_max,
            high_confidence_similarity: policy.high_confidence_similarity,
            high_confidence: policy.high_confidence,
            low_confidence: policy.low_confidence,
            high_priority_impact: DEFAULT_HIGH_PRIORITY_IMPACT,
            max_impact_score: policy.max_impact_score,
            default_language: DEFAULT_LANGUAGE.to_string(),
            unknown_fields: BTreeMap::new(),
        }
    }
}

impl PipelineConfig {
    /// Thresholds the suggestion generator works with
    pub fn suggestion_policy(&self) -> SuggestionPolicy {
        SuggestionPolicy {
            local_util_max: self.local_util_max,
            shared_package_max: self.shared_package_max,
            high_confidence_similarity: self.high_confidence_similarity,
            high_confidence: self.high_confidence,
            low_confidence: self.low_confidence,
            max_impact_score: self.max_impact_score,
        }
    }

    /// Checks the values for internal consistency, returning the first problem
    fn validate(&self) -> std::result::Result<(), String> {
        if self.local_util_max == 0 {
            return Err("local_util_max must be at least 1".to_string());
        }
        if self.shared_package_max < self.local_util_max {
            return Err(format!(
                "shared_package_max ({}) must not be smaller than local_util_max ({})",
                self.shared_package_max, self.local_util_max
            ));
        }
        for (name, value) in [
            ("high_confidence_similarity", self.high_confidence_similarity),
            ("high_confidence", self.high_confidence),
            ("low_confidence", self.low_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be between 0 and 1, got {}", name, value));
            }
        }
        if self.max_impact_score.is_nan() || self.max_impact_score <= 0.0 {
            return Err("max_impact_score must be greater than 0".to_string());
        }
        if self.high_priority_impact.is_nan() || self.high_priority_impact < 0.0 {
            return Err("high_priority_impact must be a non-negative number".to_string());
        }
        if self.default_language.trim().is_empty() {
            return Err("default_language must not be empty".to_string());
        }
        Ok(())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<PipelineConfig> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content, path)
}

/// Parse and validate YAML config content; `path` is only used in messages.
pub fn parse_config(content: &str, path: &Path) -> Result<PipelineConfig> {
    // An empty YAML document deserializes as null, not as an empty mapping
    let config: PipelineConfig = if content.trim().is_empty() {
        PipelineConfig::default()
    } else {
        serde_yaml_ng::from_str(content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    config.validate().map_err(|reason| ReportError::ConfigError {
        path: path.to_path_buf(),
        reason,
    })?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &PipelineConfig) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
