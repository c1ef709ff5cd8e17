use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum inventory/config file size (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects symbolic links without following them.
///
/// # Arguments
/// * `path` - The path to check
/// * `operation` - What the caller is about to do ("read", "write"), used in messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a file as UTF-8 after checking that it is a regular file,
/// not a symlink, and no larger than [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human readable name for error messages (e.g. "inventory")
///
/// # Errors
/// Returns an error if any check fails or the content cannot be read.
pub fn read_validated_file(path: &Path, file_description: &str) -> Result<String> {
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

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Fails when `file_size` exceeds `max_size`.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
