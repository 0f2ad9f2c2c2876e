use super::raw_match::MatchError;
use super::semantic_category::SemanticCategory;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Number of hex characters kept from a digest when deriving identifiers
pub const ID_HASH_LENGTH: usize = 12;

/// Span of source lines a block was matched on (1-based, inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    file_path: String,
    line_start: u64,
    line_end: u64,
}

impl SourceLocation {
    /// Creates a location, rejecting spans that end before they start or
    /// whose line count does not fit in a `u64`
    pub fn new(file_path: String, line_start: u64, line_end: u64) -> Result<Self, MatchError> {
        if line_end < line_start {
            return Err(MatchError::InvertedRange {
                line_start,
                line_end,
            });
        }
        if (line_end - line_start).checked_add(1).is_none() {
            return Err(MatchError::SpanTooLarge {
                line_start,
                line_end,
            });
        }
        Ok(Self {
            file_path,
            line_start,
            line_end,
        })
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line_start(&self) -> u64 {
        self.line_start
    }

    pub fn line_end(&self) -> u64 {
        self.line_end
    }

    /// Always at least 1; `new` guarantees this cannot overflow
    pub fn line_count(&self) -> u64 {
        self.line_end - self.line_start + 1
    }
}

/// CodeBlock value object: one matched fragment, classified and fingerprinted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    block_id: String,
    pattern_id: String,
    location: SourceLocation,
    relative_path: String,
    source_code: String,
    language: String,
    category: SemanticCategory,
    repository_path: String,
    line_count: u64,
    content_hash: String,
}

impl CodeBlock {
    /// Builds a block, deriving its identifier, line count and content hash.
    ///
    /// `location.file_path` is expected to be relative to the repository
    /// root already, so it doubles as `relative_path`.
    pub fn new(
        pattern_id: String,
        location: SourceLocation,
        source_code: String,
        language: String,
        category: SemanticCategory,
        repository_path: String,
    ) -> Self {
        let block_id = block_id_for(location.file_path(), location.line_start());
        let content_hash = content_hash_for(&source_code);
        let line_count = location.line_count();
        let relative_path = location.file_path().to_string();

        Self {
            block_id,
            pattern_id,
            location,
            relative_path,
            source_code,
            language,
            category,
            repository_path,
            line_count,
            content_hash,
        }
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    pub fn pattern_id(&self) -> &str {
        &self.pattern_id
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn category(&self) -> SemanticCategory {
        self.category
    }

    pub fn repository_path(&self) -> &str {
        &self.repository_path
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }
}

/// Stable block identifier: `cb_` + 12 hex chars of SHA-256 over `path:line`
pub fn block_id_for(file_path: &str, line_start: u64) -> String {
    let digest = sha256_hex(format!("{}:{}", file_path, line_start).as_bytes());
    format!("cb_{}", &digest[..ID_HASH_LENGTH])
}

/// SHA-256 (hex) of the normalized source text
pub fn content_hash_for(source_code: &str) -> String {
    sha256_hex(normalize_source(source_code).as_bytes())
}

/// Canonical form of a fragment used for exact-duplicate comparison.
///
/// Line endings become `\n`, trailing whitespace is stripped from every
/// line and leading/trailing blank lines are dropped. Indentation and
/// interior blank lines are kept.
pub fn normalize_source(source_code: &str) -> String {
    let unified = source_code.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = unified.lines().map(str::trim_end).collect();

    let first = lines.iter().position(|l| !l.is_empty());
    let last = lines.iter().rposition(|l| !l.is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
