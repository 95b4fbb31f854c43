use crate::asset_export::domain::{CompiledRecord, DeviceRecord, ExportRow, RowKind};

/// RecordCompiler lays a device record out as fixed-width export rows.
///
/// Pure and deterministic: the same record always compiles to the same rows.
pub struct RecordCompiler;

impl RecordCompiler {
    pub fn compile(record: &DeviceRecord) -> CompiledRecord {
        let location = record.location.as_str();
        let id = record.computer_id();
        let identity = &record.identity;

        let comp = ExportRow::builder(RowKind::Comp, location, id)
            .set_opt(4, identity.serial.as_deref())
            .set_opt(5, identity.memory_capacity.as_deref())
            .set_opt(6, identity.manufacturer.as_deref())
            .set_opt(7, identity.model.as_deref())
            .set_opt(8, identity.barcode.as_deref())
            .set_opt(9, identity.manufacturer.as_deref())
            .set_opt(12, identity.asset_number.as_deref())
            .build();

        let cpus = record
            .cpus
            .iter()
            .map(|cpu| {
                ExportRow::builder(RowKind::Cpu, location, id)
                    .set(3, cpu.slot_id.as_str())
                    .set(4, cpu.description.as_str())
                    .set(5, cpu.core_count.as_str())
                    .set(6, cpu.type_code.as_str())
                    .set(7, cpu.speed.as_str())
                    .set(8, cpu.model.as_str())
                    .build()
            })
            .collect();

        let storages = record
            .storages
            .iter()
            .map(|storage| {
                ExportRow::builder(RowKind::Hdd, location, id)
                    .set(3, storage.slot_id.as_str())
                    .set(4, storage.serial.as_str())
                    .set(5, storage.size_code.as_str())
                    .set(6, "1")
                    .set(7, storage.wipe_status_code())
                    .set(8, storage.operator.as_str())
                    .set(9, storage.wipe_status.label())
                    .set(10, storage.wipe_started.as_str())
                    .set(11, storage.wipe_finished.as_str())
                    .set(12, storage.storage_type.as_str())
                    .set(13, storage.wipe_method.as_str())
                    .build()
            })
            .collect();

        let battery = ExportRow::builder(RowKind::Bat, location, id)
            .set(3, "bat")
            .set(7, record.battery.status_code())
            .set(14, record.battery.health_value.as_str())
            .build();

        let memory = ExportRow::builder(RowKind::Mem, location, id)
            .set(3, "mem")
            .set(4, record.memory.capacity.as_str())
            .set(5, record.memory.memory_type.as_str())
            .build();

        CompiledRecord {
            computer_id: id.clone(),
            serial: identity.serial.clone().unwrap_or_default(),
            barcode: identity.barcode.clone().unwrap_or_default(),
            comp,
            cpus,
            storages,
            battery,
            memory,
        }
    }
}
