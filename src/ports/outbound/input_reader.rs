use crate::shared::Result;

/// InputReader port for obtaining the raw analysis request
///
/// This port abstracts where the JSON document produced by the pattern
/// matching engine comes from (stdin in production, fixtures in tests).
pub trait InputReader {
    /// Reads the whole request document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be read
    /// - The document exceeds the accepted size
    fn read_input(&self) -> Result<String>;
}
