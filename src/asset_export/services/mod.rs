mod cpu_descriptor;
mod export_naming;
mod record_compiler;
mod report_parser;
pub mod storage_fields;

pub use cpu_descriptor::CpuDescriptor;
pub use export_naming::ExportNaming;
pub use record_compiler::RecordCompiler;
pub use report_parser::{ParsedDevice, ReportOutcome, ReportParser};
pub use storage_fields::{SlotFieldError, SlotList, StorageDescriptor};
