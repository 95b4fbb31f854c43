use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest report file the reader will load (100 MB).
pub const MAX_REPORT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file, not a symlink or directory.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file for error messages (e.g. "report file")
///
/// # Errors
/// Returns an error if the path is missing, is a symbolic link, or is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "{} is a symbolic link. Symbolic links are not processed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_REPORT_FILE_SIZE)
}

/// Validates that a path exists and is a directory.
///
/// Symlinked directories are accepted here; network shares are commonly
/// mounted that way.
pub fn validate_directory(path: &Path, directory_description: &str) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} {}: {}",
            directory_description,
            path.display(),
            e
        )
    })?;

    if !metadata.is_dir() {
        anyhow::bail!(
            "{} {} is not a directory",
            directory_description,
            path.display()
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
