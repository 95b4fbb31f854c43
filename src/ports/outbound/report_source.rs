use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportSource port for discovering and reading inbound report files
///
/// This port abstracts the input directory so the orchestration logic can
/// be exercised without touching the file system.
pub trait ReportSource {
    /// Lists the regular files directly inside `input_directory`, sorted by name
    ///
    /// # Arguments
    /// * `input_directory` - Directory to scan (non-recursive)
    /// * `excluded` - Files that must never be returned (e.g. the config file)
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed
    fn list_candidates(&self, input_directory: &Path, excluded: &[PathBuf]) -> Result<Vec<PathBuf>>;

    /// Returns true if the file is still present
    fn exists(&self, path: &Path) -> bool;

    /// Reads the raw content of a report file
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a regular file,
    /// is too large, or cannot be read as UTF-8
    fn read_report(&self, path: &Path) -> Result<String>;
}
