use std::path::Path;

/// LanguageDetection policy for tagging blocks with a source language
///
/// Detection is by file extension only (case-insensitive). Paths without a
/// recognised extension get the caller's default.
pub struct LanguageDetection;

impl LanguageDetection {
    /// Language name for a file extension, if recognised
    pub fn from_extension(extension: &str) -> Option<&'static str> {
        let language = match extension.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => "javascript",
            "ts" | "tsx" | "mts" | "cts" => "typescript",
            "py" => "python",
            "rs" => "rust",
            "go" => "go",
            "java" => "java",
            "rb" => "ruby",
            "php" => "php",
            "cs" => "csharp",
            "kt" | "kts" => "kotlin",
            "swift" => "swift",
            "c" | "h" => "c",
            "cc" | "cpp" | "cxx" | "hpp" | "hh" => "cpp",
            _ => return None,
        };
        Some(language)
    }

    /// Language of `file_path`, or `default` when the extension is unknown
    pub fn detect<'a>(file_path: &str, default: &'a str) -> &'a str {
        Path::new(file_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_common_extensions() {
        assert_eq!(LanguageDetection::detect("src/app.js", "x"), "javascript");
        assert_eq!(LanguageDetection::detect("src/app.tsx", "x"), "typescript");
        assert_eq!(LanguageDetection::detect("lib/util.py", "x"), "python");
        assert_eq!(LanguageDetection::detect("src/main.rs", "x"), "rust");
        assert_eq!(LanguageDetection::detect("include/a.hpp", "x"), "cpp");
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(LanguageDetection::detect("LEGACY/APP.JS", "x"), "javascript");
    }

    #[test]
    fn test_detect_falls_back_to_default() {
        assert_eq!(LanguageDetection::detect("Makefile", "javascript"), "javascript");
        assert_eq!(LanguageDetection::detect("notes.txt", "javascript"), "javascript");
        assert_eq!(LanguageDetection::detect("", "javascript"), "javascript");
    }
}
