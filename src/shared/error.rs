use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets schedulers and service wrappers distinguish a clean sweep from a
/// sweep that left files behind in the input directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every candidate file was exported and archived
    Success = 0,
    /// The sweep completed but at least one file failed and stayed in place
    FilesFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable config, unusable input directory, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FilesFailed => write!(f, "Files Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for report export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Config file not found: {path}\n\n💡 Hint: Pass the config location with --config")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: The file must be JSON with an \"io_config\" object")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid directory: {path}\nReason: {reason}\n\n💡 Hint: Check the directories listed under \"io_config\"")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Failed to read report file: {path}\nDetails: {details}")]
    ReportReadError { path: PathBuf, details: String },

    #[error("Failed to parse report file: {path}\nDetails: {details}\n\n💡 Hint: Report files must contain a \"PCProduct\" array")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Output directory does not exist: {path}\n\n💡 Hint: Create the directory or fix \"output_directory\" in the config")]
    OutputDirectoryMissing { path: PathBuf },

    #[error("Failed to write export file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions on the output directory")]
    ExportWriteError { path: PathBuf, details: String },

    #[error("Failed to archive report file: {path}\nDetails: {details}")]
    ArchiveError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
