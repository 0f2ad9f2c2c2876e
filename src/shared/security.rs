use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of the JSON document accepted on stdin (256 MB)
pub const MAX_INPUT_SIZE: u64 = 256 * 1024 * 1024;

/// Maximum size of a configuration file (1 MB)
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file for error messages
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_size(metadata.len(), file_description, MAX_CONFIG_SIZE)
}

/// Validates that `size` bytes of `what` stay within `max_size`
pub fn validate_size(size: u64, what: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            what,
            size,
            max_size
        );
    }
    Ok(())
}
