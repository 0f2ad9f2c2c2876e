use super::code_block::{CodeBlock, ID_HASH_LENGTH};
use super::semantic_category::SemanticCategory;
use serde::Serialize;
use std::collections::HashSet;

/// Smallest number of blocks that makes a duplicate group
pub const MIN_GROUP_SIZE: usize = 2;

/// How members of a group were judged to be the same code
///
/// Only `ExactMatch` is produced today; the other variants keep their slot
/// in the report schema for similarity detectors that tolerate renames or
/// rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMethod {
    ExactMatch,
    Structural,
    Semantic,
}

/// DuplicateGroup value object: two or more blocks with identical content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    group_id: String,
    pattern_id: String,
    member_block_ids: Vec<String>,
    similarity_score: f64,
    similarity_method: SimilarityMethod,
    category: SemanticCategory,
    language: String,
    occurrence_count: usize,
    total_lines: u64,
    affected_files: Vec<String>,
    affected_repositories: Vec<String>,
    impact_score: f64,
}

impl DuplicateGroup {
    /// Builds an exact-match group from blocks sharing one content hash.
    ///
    /// Returns `None` when fewer than two members are given. The first
    /// member supplies pattern, category and language; file and repository
    /// lists are deduplicated in first-seen order.
    pub fn exact(content_hash: &str, members: &[&CodeBlock]) -> Option<Self> {
        if members.len() < MIN_GROUP_SIZE {
            return None;
        }
        let first = members[0];

        let occurrence_count = members.len();
        let total_lines = members
            .iter()
            .fold(0u64, |sum, b| sum.saturating_add(b.line_count()));
        let similarity_score = 1.0;

        Some(Self {
            group_id: format!("dg_{}", &content_hash[..ID_HASH_LENGTH.min(content_hash.len())]),
            pattern_id: first.pattern_id().to_string(),
            member_block_ids: members.iter().map(|b| b.block_id().to_string()).collect(),
            similarity_score,
            similarity_method: SimilarityMethod::ExactMatch,
            category: first.category(),
            language: first.language().to_string(),
            occurrence_count,
            total_lines,
            affected_files: dedup_in_order(members.iter().map(|b| b.location().file_path())),
            affected_repositories: dedup_in_order(members.iter().map(|b| b.repository_path())),
            impact_score: impact_score(occurrence_count, similarity_score, total_lines),
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    pub fn member_block_ids(&self) -> &[String] {
        &self.member_block_ids
    }

    pub fn similarity_score(&self) -> f64 {
        self.similarity_score
    }

    pub fn similarity_method(&self) -> SimilarityMethod {
        self.similarity_method
    }

    pub fn category(&self) -> SemanticCategory {
        self.category
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrence_count
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn affected_files(&self) -> &[String] {
        &self.affected_files
    }

    pub fn affected_repositories(&self) -> &[String] {
        &self.affected_repositories
    }

    pub fn impact_score(&self) -> f64 {
        self.impact_score
    }

    /// Lines that would disappear if all but one occurrence were removed
    pub fn potential_loc_reduction(&self) -> u64 {
        self.total_lines - self.total_lines / self.occurrence_count as u64
    }
}

/// Value of consolidating a group, on a 0-100 scale.
///
/// Weighted sum of how often the code repeats (40, saturating at 20
/// copies), how alike the copies are (35) and how many lines are involved
/// (25, saturating at 100 lines). Rounded to two decimals.
pub fn impact_score(occurrence_count: usize, similarity_score: f64, total_lines: u64) -> f64 {
    let occurrence_factor = (occurrence_count as f64 / 20.0).min(1.0) * 40.0;
    let similarity_factor = similarity_score.clamp(0.0, 1.0) * 35.0;
    let size_factor = (total_lines as f64 / 100.0).min(1.0) * 25.0;

    let score = (occurrence_factor + similarity_factor + size_factor).min(100.0);
    (score * 100.0).round() / 100.0
}

fn dedup_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item) {
            unique.push(item.to_string());
        }
    }
    unique
}
