use crate::ports::outbound::ReportArchiver;
use crate::shared::error::ExportError;
use crate::shared::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const COLLISION_SUFFIX_FORMAT: &str = "%Y%m%d%H%M%S";

/// FileSystemArchiver adapter moving processed reports into the archive directory
///
/// A plain rename is tried first. When that fails (typically because the
/// archive lives on another filesystem) the file is copied and the original
/// removed. If a file of the same name is already archived, the new one gets
/// a `_<timestamp>` suffix, plus `_<n>` when that name is taken too. An
/// archived report is never overwritten.
pub struct FileSystemArchiver {
    archive_directory: PathBuf,
}

impl FileSystemArchiver {
    pub fn new(archive_directory: PathBuf) -> Self {
        Self { archive_directory }
    }

    fn destination_for(&self, file_name: &str, path: &Path) -> PathBuf {
        let candidate = self.archive_directory.join(file_name);
        if !candidate.exists() {
            return candidate;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let suffix = Local::now().format(COLLISION_SUFFIX_FORMAT).to_string();

        let mut candidate = self
            .archive_directory
            .join(format!("{}_{}{}", stem, suffix, extension));
        let mut counter = 1u32;
        while candidate.exists() {
            candidate = self
                .archive_directory
                .join(format!("{}_{}_{}{}", stem, suffix, counter, extension));
            counter += 1;
        }
        candidate
    }

    fn archive_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        ExportError::ArchiveError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }
}

impl ReportArchiver for FileSystemArchiver {
    fn archive(&self, path: &Path) -> Result<PathBuf> {
        if !self.archive_directory.is_dir() {
            return Err(Self::archive_error(
                path,
                format!(
                    "Archive directory does not exist: {}",
                    self.archive_directory.display()
                ),
            ));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Self::archive_error(path, "path has no file name"))?;
        let destination = self.destination_for(&file_name, path);

        if let Err(rename_error) = fs::rename(path, &destination) {
            tracing::debug!(
                error = %rename_error,
                "rename into archive failed, falling back to copy"
            );
            fs::copy(path, &destination)
                .map_err(|e| Self::archive_error(path, format!("copy failed: {}", e)))?;
            if let Err(e) = fs::remove_file(path) {
                // Leave one copy only; the report will be picked up again otherwise.
                let _ = fs::remove_file(&destination);
                return Err(Self::archive_error(
                    path,
                    format!("could not remove original after copy: {}", e),
                ));
            }
        }

        Ok(destination)
    }
}
