/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the diagnostic log and the console.
pub mod activity_log;
pub mod export_writer;
pub mod progress_reporter;
pub mod record_formatter;
pub mod report_archiver;
pub mod report_source;
pub mod sweep_trigger;

pub use activity_log::ActivityLog;
pub use export_writer::ExportWriter;
pub use progress_reporter::ProgressReporter;
pub use record_formatter::RecordFormatter;
pub use report_archiver::ReportArchiver;
pub use report_source::ReportSource;
pub use sweep_trigger::{SweepTrigger, TriggerEvent};
