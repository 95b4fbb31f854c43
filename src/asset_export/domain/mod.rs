pub mod anomaly;
pub mod device_record;
pub mod export_row;
pub mod report;

pub use anomaly::{FieldAnomaly, SkipReason};
pub use device_record::{Battery, ComputerId, Cpu, DeviceRecord, Identity, Memory, Storage, WipeStatus};
pub use export_row::{CompiledRecord, ExportRow, RowKind, ROW_WIDTH};
pub use report::{Report, ReportDocument, NOT_AVAILABLE, SLOT_COUNT};
