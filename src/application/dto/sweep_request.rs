use std::path::PathBuf;

/// SweepRequest - Internal request DTO for one pass over the input directory
#[derive(Debug, Clone)]
pub struct SweepRequest {
    /// Directory holding inbound report files
    pub input_directory: PathBuf,
    /// Files in the input directory that are never treated as reports
    pub excluded_files: Vec<PathBuf>,
}

impl SweepRequest {
    pub fn new(input_directory: PathBuf) -> Self {
        Self {
            input_directory,
            excluded_files: Vec::new(),
        }
    }

    /// Excludes a file (typically the config file) from processing
    pub fn excluding(mut self, path: PathBuf) -> Self {
        self.excluded_files.push(path);
        self
    }
}
