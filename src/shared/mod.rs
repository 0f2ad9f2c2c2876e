/// Shared kernel - error types, result alias and input limits
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
