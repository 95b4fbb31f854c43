/// Filesystem adapters for the input, output and archive directories
mod archiver;
mod export_writer;
mod report_source;

pub use archiver::FileSystemArchiver;
pub use export_writer::FileSystemExportWriter;
pub use report_source::FileSystemReportSource;
