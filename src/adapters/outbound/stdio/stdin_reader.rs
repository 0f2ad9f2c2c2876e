use crate::ports::outbound::InputReader;
use crate::shared::security::{validate_size, MAX_INPUT_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::io::{self, Read};

/// StdinReader adapter reading the request document from stdin
///
/// Reads at most one byte past `MAX_INPUT_SIZE`, so oversized input is
/// rejected without buffering all of it.
pub struct StdinReader;

impl StdinReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a bounded document from any reader
    pub(crate) fn read_bounded<R: Read>(reader: R, max_size: u64) -> Result<String> {
        let mut content = String::new();
        reader
            .take(max_size + 1)
            .read_to_string(&mut content)
            .context("Failed to read input from stdin")?;

        validate_size(content.len() as u64, "stdin input", max_size)?;
        Ok(content)
    }
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InputReader for StdinReader {
    fn read_input(&self) -> Result<String> {
        Self::read_bounded(io::stdin().lock(), MAX_INPUT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_bounded_within_limit() {
        let content = StdinReader::read_bounded(Cursor::new("{\"a\": 1}"), 64).unwrap();
        assert_eq!(content, "{\"a\": 1}");
    }

    #[test]
    fn test_read_bounded_exactly_at_limit() {
        let content = StdinReader::read_bounded(Cursor::new("12345"), 5).unwrap();
        assert_eq!(content, "12345");
    }

    #[test]
    fn test_read_bounded_rejects_oversized_input() {
        let result = StdinReader::read_bounded(Cursor::new("123456"), 5);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_bounded_rejects_invalid_utf8() {
        let result = StdinReader::read_bounded(Cursor::new(vec![0xff, 0xfe, 0x00]), 64);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read input from stdin"));
    }
}
