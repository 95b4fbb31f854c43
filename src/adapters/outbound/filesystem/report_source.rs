use crate::ports::outbound::ReportSource;
use crate::shared::error::ExportError;
use crate::shared::path_safety::validate_regular_file;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReportSource adapter for the inbound report directory
///
/// Only regular files directly inside the directory are listed; symbolic
/// links and subdirectories are left alone.
pub struct FileSystemReportSource;

impl FileSystemReportSource {
    pub fn new() -> Self {
        Self
    }

    fn same_file(candidate: &Path, excluded: &[PathBuf]) -> bool {
        let candidate = fs::canonicalize(candidate).unwrap_or_else(|_| candidate.to_path_buf());
        excluded.iter().any(|ex| {
            let ex = fs::canonicalize(ex).unwrap_or_else(|_| ex.clone());
            ex == candidate
        })
    }
}

impl Default for FileSystemReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for FileSystemReportSource {
    fn list_candidates(&self, input_directory: &Path, excluded: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(input_directory).with_context(|| {
            format!("Failed to list input directory: {}", input_directory.display())
        })?;

        let mut candidates = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!("Failed to list input directory: {}", input_directory.display())
            })?;
            // DirEntry::file_type does not follow symlinks
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let path = entry.path();
            if Self::same_file(&path, excluded) {
                tracing::debug!(path = %path.display(), "skipping excluded file");
                continue;
            }
            candidates.push(path);
        }

        candidates.sort();
        Ok(candidates)
    }

    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or(false)
    }

    fn read_report(&self, path: &Path) -> Result<String> {
        let read = validate_regular_file(path, "report file")
            .and_then(|_| fs::read_to_string(path).map_err(Into::into));
        read.map_err(|e| {
            ExportError::ReportReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
