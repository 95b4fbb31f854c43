//! secure-erase-export - Asset-disposition report exporter
//!
//! This library turns the JSON reports written by a secure-erase / asset
//! disposition tool into tab-delimited import files for an asset-management
//! system, one file per device, and archives each processed report.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`asset_export`): Report model, device records, export rows
//!   and the pure parsing/compiling services
//! - **Application Layer** (`application`): Sweep and watch use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, formatter, logging, console and
//!   watch implementations of the ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use secure_erase_export::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ProcessReportsUseCase::new(
//!     FileSystemReportSource::new(),
//!     TabDelimitedFormatter::new(),
//!     FileSystemExportWriter::new(PathBuf::from("/data/export/")),
//!     FileSystemArchiver::new(PathBuf::from("/data/archive/")),
//!     TracingActivityLog::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let summary = use_case.execute(&SweepRequest::new(PathBuf::from("/data/inbound/")))?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod asset_export;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemArchiver, FileSystemExportWriter, FileSystemReportSource,
    };
    pub use crate::adapters::outbound::formatters::TabDelimitedFormatter;
    pub use crate::adapters::outbound::logging::TracingActivityLog;
    pub use crate::application::dto::{SweepRequest, SweepSummary, TriggerMode};
    pub use crate::application::use_cases::{ProcessReportsUseCase, WatchReportsUseCase};
    pub use crate::asset_export::domain::{CompiledRecord, DeviceRecord, ExportRow, Report};
    pub use crate::asset_export::services::{RecordCompiler, ReportOutcome, ReportParser};
    pub use crate::ports::inbound::ReportExportPort;
    pub use crate::ports::outbound::{
        ActivityLog, ExportWriter, ProgressReporter, RecordFormatter, ReportArchiver,
        ReportSource, SweepTrigger, TriggerEvent,
    };
    pub use crate::shared::Result;
}
