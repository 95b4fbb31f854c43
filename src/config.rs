//! Configuration file support.
//!
//! The tool is configured through a JSON file (by default `config.json` in
//! the working directory) naming the three directories it works with, plus
//! optional logging and watch settings.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use std::time::Duration;

use crate::shared::error::ExportError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub io_config: IoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_json::Value>,
}

/// The directories the tool reads from and writes to.
#[derive(Debug, Deserialize)]
pub struct IoConfig {
    pub input_directory: String,
    pub output_directory: String,
    pub archive_directory: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Append the diagnostic log to this file instead of stderr.
    pub log_file: Option<String>,
    /// trace, debug, info, warn or error.
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WatchConfig {
    pub poll_interval_secs: Option<u64>,
}

impl ConfigFile {
    pub fn input_directory(&self) -> PathBuf {
        normalize_directory(&self.io_config.input_directory)
    }

    pub fn output_directory(&self) -> PathBuf {
        normalize_directory(&self.io_config.output_directory)
    }

    pub fn archive_directory(&self) -> PathBuf {
        normalize_directory(&self.io_config.archive_directory)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(
            self.watch
                .poll_interval_secs
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        )
    }
}

/// Load config from an explicit path.
///
/// # Errors
/// Returns [`ExportError::ConfigNotFound`] if the file does not exist,
/// [`ExportError::ConfigParseError`] if it is not valid JSON of the expected
/// shape, and [`ExportError::Validation`] for empty or invalid values.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Err(ExportError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ExportError::ConfigParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: ConfigFile =
        serde_json::from_str(&content).map_err(|e| ExportError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Appends the platform separator when the directory string lacks one.
pub fn normalize_directory(directory: &str) -> PathBuf {
    let directory = directory.trim();
    if directory.ends_with(MAIN_SEPARATOR) || directory.ends_with('/') {
        PathBuf::from(directory)
    } else {
        PathBuf::from(format!("{}{}", directory, MAIN_SEPARATOR))
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let directories = [
        ("input_directory", &config.io_config.input_directory),
        ("output_directory", &config.io_config.output_directory),
        ("archive_directory", &config.io_config.archive_directory),
    ];
    for (field, value) in directories {
        if value.trim().is_empty() {
            return Err(ExportError::Validation {
                message: format!("io_config.{} must not be empty", field),
            }
            .into());
        }
    }

    if let Some(level) = &config.logging.level {
        crate::adapters::outbound::logging::parse_level(level).map_err(|e| {
            ExportError::Validation {
                message: format!("logging.level: {}", e),
            }
        })?;
    }

    if config.watch.poll_interval_secs == Some(0) {
        return Err(ExportError::Validation {
            message: "watch.poll_interval_secs must be at least 1".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "io_config": {
                    "input_directory": "/data/in",
                    "output_directory": "/data/out/",
                    "archive_directory": "/data/archive"
                },
                "logging": {"log_file": "export.log", "level": "debug"},
                "watch": {"poll_interval_secs": 30}
            }"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.io_config.input_directory, "/data/in");
        assert_eq!(config.logging.log_file.as_deref(), Some("export.log"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_optional_sections_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"io_config": {"input_directory": "in", "output_directory": "out", "archive_directory": "arc"}}"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert!(config.logging.log_file.is_none());
        assert!(config.logging.level.is_none());
        assert_eq!(
            config.poll_interval(),
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
        );
    }

    #[test]
    fn test_directories_are_normalized() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(
            normalize_directory("/data/in"),
            PathBuf::from(format!("/data/in{}", sep))
        );
        assert_eq!(normalize_directory("/data/in/"), PathBuf::from("/data/in/"));
        assert_eq!(
            normalize_directory("  relative "),
            PathBuf::from(format!("relative{}", sep))
        );
        // The separator does not change which directory is meant
        assert_eq!(normalize_directory("/data/in"), PathBuf::from("/data/in"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("nope.json"));
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_io_config_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"logging": {}}"#);

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("io_config"));
    }

    #[test]
    fn test_empty_directory_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"io_config": {"input_directory": "in", "output_directory": "  ", "archive_directory": "arc"}}"#,
        );

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("io_config.output_directory must not be empty"));
    }

    #[test]
    fn test_invalid_level_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"io_config": {"input_directory": "in", "output_directory": "out", "archive_directory": "arc"},
                "logging": {"level": "chatty"}}"#,
        );

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_zero_poll_interval_validation_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"io_config": {"input_directory": "in", "output_directory": "out", "archive_directory": "arc"},
                "watch": {"poll_interval_secs": 0}}"#,
        );

        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{"io_config": {"input_directory": "in", "output_directory": "out", "archive_directory": "arc"},
                "service_name": "SecureEraseExport",
                "retries": 3}"#,
        );

        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("service_name"));
        assert!(config.unknown_fields.contains_key("retries"));
    }
}
