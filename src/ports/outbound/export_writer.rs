use crate::shared::Result;
use std::path::{Path, PathBuf};

/// ExportWriter port for persisting export files
///
/// Writing has a precondition (the destination exists) that the orchestrator
/// checks up front with [`ExportWriter::ensure_ready`], so that a report file
/// is never archived when none of its records could be written.
pub trait ExportWriter {
    /// Verifies the destination can accept export files
    ///
    /// # Errors
    /// Returns an error if the output directory is missing or not a directory
    fn ensure_ready(&self) -> Result<()>;

    /// Writes one export file and returns its full path
    ///
    /// # Arguments
    /// * `file_name` - Generated file name (no directory component)
    /// * `content` - Formatted rows
    fn write_export(&self, file_name: &str, content: &str) -> Result<PathBuf>;

    /// Removes an export file written earlier in the same report, used when
    /// a later record of that report cannot be written
    fn discard_export(&self, path: &Path) -> Result<()>;
}
