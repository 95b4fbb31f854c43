/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that the CLI and the watch loop
/// use to interact with the application core.
pub mod report_export_port;

pub use report_export_port::ReportExportPort;
