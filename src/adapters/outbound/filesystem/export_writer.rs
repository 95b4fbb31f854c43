use crate::ports::outbound::ExportWriter;
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemExportWriter adapter for the output directory
///
/// Export files are created exclusively: an existing file (or symlink) with
/// the same name is never overwritten.
pub struct FileSystemExportWriter {
    output_directory: PathBuf,
}

impl FileSystemExportWriter {
    pub fn new(output_directory: PathBuf) -> Self {
        Self { output_directory }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

impl ExportWriter for FileSystemExportWriter {
    fn ensure_ready(&self) -> Result<()> {
        match fs::metadata(&self.output_directory) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ExportError::InvalidDirectory {
                path: self.output_directory.clone(),
                reason: "output directory is not a directory".to_string(),
            }
            .into()),
            Err(_) => Err(ExportError::OutputDirectoryMissing {
                path: self.output_directory.clone(),
            }
            .into()),
        }
    }

    fn write_export(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_directory.join(file_name);
        let write_error = |e: io::Error| ExportError::ExportWriteError {
            path: path.clone(),
            details: e.to_string(),
        };

        // create_new refuses existing files and dangling symlinks alike
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(write_error)?;
        file.write_all(content.as_bytes()).map_err(write_error)?;
        file.sync_all().map_err(write_error)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "export file written");
        Ok(path)
    }

    fn discard_export(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| {
            ExportError::ExportWriteError {
                path: path.to_path_buf(),
                details: format!("could not remove partial export: {}", e),
            }
            .into()
        })
    }
}
