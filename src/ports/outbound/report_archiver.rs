use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ReportArchiver port for relocating processed report files
pub trait ReportArchiver {
    /// Moves `path` into the archive and returns its new location
    ///
    /// # Errors
    /// Returns an error if the archive directory is unusable or the move fails
    fn archive(&self, path: &Path) -> Result<PathBuf>;
}
