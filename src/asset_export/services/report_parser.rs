use serde_json::Value;

use super::cpu_descriptor::CpuDescriptor;
use super::storage_fields::{self, SlotFieldError, StorageDescriptor};
use crate::asset_export::domain::report::is_not_available;
use crate::asset_export::domain::{
    Battery, Cpu, DeviceRecord, FieldAnomaly, Identity, Memory, Report, ReportDocument,
    SkipReason, Storage, SLOT_COUNT,
};
use crate::asset_export::policies::{BatteryHealthPolicy, BatteryNote, WipeOutcomePolicy};

/// A report that passed the eligibility gate, with the anomalies met while
/// extracting it.
#[derive(Debug)]
pub struct ParsedDevice {
    pub record: DeviceRecord,
    pub anomalies: Vec<FieldAnomaly>,
}

#[derive(Debug)]
pub enum ReportOutcome {
    Accepted(ParsedDevice),
    Skipped { serial: String, reason: SkipReason },
}

/// ReportParser turns disposition reports into device records.
///
/// Each field group (identity, CPUs, storage, battery, memory) is extracted
/// independently: a problem in one group is recorded as a [`FieldAnomaly`]
/// and never prevents the others from being filled.
pub struct ReportParser;

impl ReportParser {
    /// Parses a whole report file body (`{"PCProduct": [...]}`).
    ///
    /// # Errors
    /// Returns an error only when the body is not valid JSON of that shape;
    /// problems inside individual entries become skipped outcomes.
    pub fn parse_document(content: &str) -> serde_json::Result<Vec<ReportOutcome>> {
        let document: ReportDocument = serde_json::from_str(content)?;
        Ok(document
            .products
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_entry(index, entry))
            .collect())
    }

    fn parse_entry(index: usize, entry: Value) -> ReportOutcome {
        if !entry.is_object() {
            return ReportOutcome::Skipped {
                serial: format!("PCProduct[{}]", index),
                reason: SkipReason::Malformed("entry is not an object".to_string()),
            };
        }
        match serde_json::from_value::<Report>(entry) {
            Ok(report) => Self::parse_report(&report),
            Err(e) => ReportOutcome::Skipped {
                serial: format!("PCProduct[{}]", index),
                reason: SkipReason::Malformed(e.to_string()),
            },
        }
    }

    /// Applies the eligibility gate, then extracts every field group.
    pub fn parse_report(report: &Report) -> ReportOutcome {
        if let Some(reason) = Self::ineligibility(report) {
            return ReportOutcome::Skipped {
                serial: report.display_serial().to_string(),
                reason,
            };
        }

        let mut anomalies = Vec::new();
        let mut record = DeviceRecord::new(report.location.clone().unwrap_or_default());
        record.identity = Self::extract_identity(report, &mut anomalies);
        record.cpus = Self::extract_cpus(report, &mut anomalies);
        record.storages = Self::extract_storages(report, &mut anomalies);
        record.battery = Self::extract_battery(report, &mut anomalies);
        record.memory = Self::extract_memory(report, &mut anomalies);

        ReportOutcome::Accepted(ParsedDevice { record, anomalies })
    }

    fn ineligibility(report: &Report) -> Option<SkipReason> {
        if is_not_available(report.asset_number.as_deref()) {
            Some(SkipReason::NoAssetNumber)
        } else if is_not_available(report.asset_id.as_deref()) {
            Some(SkipReason::NoBarcode)
        } else {
            None
        }
    }

    pub fn extract_identity(report: &Report, anomalies: &mut Vec<FieldAnomaly>) -> Identity {
        let barcode = Self::extract_barcode(report.asset_id.as_deref());
        if barcode.is_none() {
            anomalies.push(FieldAnomaly::MissingBarcode {
                serial: report.display_serial().to_string(),
            });
        }

        Identity {
            serial: report.serial_number.clone(),
            memory_capacity: report.ram.clone(),
            manufacturer: report.vendor.clone(),
            model: report.model.as_deref().map(Self::extract_model),
            barcode: Some(barcode.unwrap_or_default()),
            asset_number: report.asset_number.clone(),
        }
    }

    /// Pulls the model out of a vendor string such as `Latitude [XPS 13]`.
    ///
    /// Strings not ending in "]" are returned unchanged.
    pub fn extract_model(raw: &str) -> String {
        let trimmed = raw.trim();
        if !trimmed.ends_with(']') {
            return trimmed.to_string();
        }
        let Some(start) = trimmed.rfind('[') else {
            return trimmed.to_string();
        };
        let bracketed = &trimmed[start + 1..];
        bracketed
            .split(' ')
            .next()
            .unwrap_or_default()
            .trim_end_matches(']')
            .to_string()
    }

    /// Last whitespace-separated token of the asset id; None when there is none.
    pub fn extract_barcode(asset_id: Option<&str>) -> Option<String> {
        if is_not_available(asset_id) {
            return None;
        }
        asset_id?.split_whitespace().last().map(str::to_string)
    }

    pub fn extract_cpus(report: &Report, anomalies: &mut Vec<FieldAnomaly>) -> Vec<Cpu> {
        let mut cpus = Vec::new();
        for slot in 1..=SLOT_COUNT {
            let Some(descriptor) = report.cpu_slot(slot) else {
                continue;
            };
            if is_not_available(Some(descriptor)) {
                continue;
            }

            let parsed = CpuDescriptor::parse(descriptor);
            if !parsed.is_recognized() {
                anomalies.push(FieldAnomaly::UnrecognizedCpu {
                    serial: report.display_serial().to_string(),
                    slot,
                    descriptor: descriptor.to_string(),
                });
            }
            cpus.push(parsed.into_cpu(slot, descriptor));
        }
        cpus
    }

    pub fn extract_storages(report: &Report, anomalies: &mut Vec<FieldAnomaly>) -> Vec<Storage> {
        let serial = report.display_serial();
        let mut storages = Vec::new();

        for slot in 1..=SLOT_COUNT {
            let Some(descriptor) = report.storage_slot(slot) else {
                continue;
            };
            if is_not_available(Some(descriptor)) {
                continue;
            }

            let parsed = StorageDescriptor::parse(descriptor).unwrap_or_else(|| {
                anomalies.push(FieldAnomaly::MalformedStorageDescriptor {
                    serial: serial.to_string(),
                    slot,
                    descriptor: descriptor.to_string(),
                });
                StorageDescriptor::default()
            });

            let mut field = |name: &'static str, result: Result<String, SlotFieldError>| {
                result.unwrap_or_else(|e| {
                    anomalies.push(FieldAnomaly::StorageField {
                        serial: serial.to_string(),
                        slot,
                        field: name,
                        reason: e.to_string(),
                    });
                    String::new()
                })
            };

            let disk_serial = field(
                "Storage Serial",
                storage_fields::storage_serial(report.storage_serial.as_deref(), slot),
            );
            let operator = field(
                "Data Wipe Employee",
                storage_fields::wipe_operator(report.wipe_employee.as_deref(), slot),
            );
            let outcome = field(
                "Data Wipe",
                storage_fields::wipe_outcome(report.wipe_outcome.as_deref(), slot),
            );
            let wipe_method = field(
                "Data Wipe Method",
                storage_fields::wipe_method(report.wipe_method.as_deref(), slot),
            );

            let (wipe_started, wipe_finished) = match storage_fields::wipe_window(
                report.wipe_started.as_deref(),
                report.wipe_finished.as_deref(),
                slot,
            ) {
                Ok(window) => window,
                Err(SlotFieldError::Timestamp { value }) => {
                    anomalies.push(FieldAnomaly::InvalidWipeTimestamp {
                        serial: serial.to_string(),
                        slot,
                        value,
                    });
                    (String::new(), String::new())
                }
                Err(e) => {
                    anomalies.push(FieldAnomaly::StorageField {
                        serial: serial.to_string(),
                        slot,
                        field: "Data Wipe Started/Finished",
                        reason: e.to_string(),
                    });
                    (String::new(), String::new())
                }
            };

            storages.push(Storage {
                slot_id: format!("hdd{}", slot),
                serial: disk_serial,
                storage_type: parsed.storage_type,
                model: parsed.model,
                size_code: parsed.size,
                operator,
                wipe_status: WipeOutcomePolicy::classify(&outcome),
                wipe_method,
                wipe_started,
                wipe_finished,
            });
        }
        storages
    }

    pub fn extract_battery(report: &Report, anomalies: &mut Vec<FieldAnomaly>) -> Battery {
        let raw = report.battery_health.as_deref();
        let assessment = BatteryHealthPolicy::assess(raw);
        let serial = report.display_serial().to_string();

        match assessment.note {
            Some(BatteryNote::ReportedNormal) => {
                anomalies.push(FieldAnomaly::BatteryHealthNormal { serial })
            }
            Some(BatteryNote::NotNumeric) => anomalies.push(FieldAnomaly::BatteryHealthNotNumeric {
                serial,
                value: raw.unwrap_or_default().to_string(),
            }),
            Some(BatteryNote::Missing) => {
                anomalies.push(FieldAnomaly::BatteryHealthMissing { serial })
            }
            None => {}
        }

        Battery {
            health_value: raw.unwrap_or_default().to_string(),
            healthy: assessment.healthy,
        }
    }

    /// Capacity comes from "RAM"; the type is the third word of the first
    /// "/"-separated part of "Configuration" (e.g. `16 GB DDR4 / 512 GB SSD`).
    pub fn extract_memory(report: &Report, anomalies: &mut Vec<FieldAnomaly>) -> Memory {
        let memory_type = match report.configuration.as_deref() {
            None => String::new(),
            Some(configuration) => {
                let first = configuration.split('/').next().unwrap_or_default();
                match first.split_whitespace().nth(2) {
                    Some(token) => token.to_string(),
                    None => {
                        anomalies.push(FieldAnomaly::MalformedConfiguration {
                            serial: report.display_serial().to_string(),
                            value: configuration.to_string(),
                        });
                        String::new()
                    }
                }
            }
        };

        Memory {
            capacity: report.ram.clone().unwrap_or_default(),
            memory_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_export::domain::WipeStatus;
    use serde_json::json;

    fn desktop_report() -> Report {
        serde_json::from_value(json!({
            "Securaze User": "Depot 4",
            "Serial Number": "5CG8301XYZ",
            "RAM": "16 GB",
            "Vendor": "HP",
            "Model": "HP EliteBook [840 G5]",
            "Asset ID": "Asset 004512",
            "'A' Number": "A-77812",
            "CPU 1": "Intel(R) Core(TM) i7-8650U CPU @ 1.90GHz",
            "CPU 2": "N/A",
            "CPU 3": "N/A",
            "CPU 4": "N/A",
            "Storage 1": "Type:&nbsp;SSD, Model: Samsung MZ7LN512, Size: 512GB",
            "Storage 2": "N/A",
            "Storage 3": "N/A",
            "Storage 4": "N/A",
            "Storage Serial": "Storage 1 / S3Z9NB0K123",
            "Data Wipe Employee": "Storage 1 / jdoe",
            "Data Wipe": "Storage 1 / Successful",
            "Data Wipe Method": "Storage 1 / NIST 800-88 Purge",
            "Data Wipe Started": "Storage 1 / 2024-03-18 09:15:42.000",
            "Data Wipe Finished": "Storage 1 / 2024-03-18 10:02:07.000",
            "Battery Health": "75",
            "Configuration": "16 GB DDR4 / 512 GB SSD"
        }))
        .unwrap()
    }

    fn accepted(outcome: ReportOutcome) -> ParsedDevice {
        match outcome {
            ReportOutcome::Accepted(parsed) => parsed,
            ReportOutcome::Skipped { reason, .. } => panic!("unexpectedly skipped: {}", reason),
        }
    }

    #[test]
    fn test_parse_full_report() {
        let parsed = accepted(ReportParser::parse_report(&desktop_report()));
        let record = parsed.record;

        assert!(parsed.anomalies.is_empty(), "{:?}", parsed.anomalies);
        assert_eq!(record.location, "Depot 4");
        assert_eq!(record.identity.serial.as_deref(), Some("5CG8301XYZ"));
        assert_eq!(record.identity.model.as_deref(), Some("840"));
        assert_eq!(record.identity.barcode.as_deref(), Some("004512"));
        assert_eq!(record.identity.asset_number.as_deref(), Some("A-77812"));

        assert_eq!(record.cpus.len(), 1);
        assert_eq!(record.cpus[0].type_code, "CI7");

        assert_eq!(record.storages.len(), 1);
        let storage = &record.storages[0];
        assert_eq!(storage.slot_id, "hdd1");
        assert_eq!(storage.serial, "S3Z9NB0K123");
        assert_eq!(storage.storage_type, "SSD");
        assert_eq!(storage.size_code, "512GB");
        assert_eq!(storage.operator, "jdoe");
        assert_eq!(storage.wipe_status, WipeStatus::Passed);
        assert_eq!(storage.wipe_status_code(), "1");
        assert_eq!(storage.wipe_method, "NIST 800-88 Purge");
        assert_eq!(storage.wipe_started, "18-03-2024 09:15:42");
        assert_eq!(storage.wipe_finished, "18-03-2024 10:02:07");

        assert_eq!(record.battery.health_value, "75");
        assert_eq!(record.battery.status_code(), "1");
        assert_eq!(record.memory.capacity, "16 GB");
        assert_eq!(record.memory.memory_type, "DDR4");
    }

    #[test]
    fn test_skips_when_asset_number_not_available() {
        let mut report = desktop_report();
        report.asset_number = Some("N/A".to_string());

        match ReportParser::parse_report(&report) {
            ReportOutcome::Skipped { serial, reason } => {
                assert_eq!(serial, "5CG8301XYZ");
                assert_eq!(reason, SkipReason::NoAssetNumber);
            }
            ReportOutcome::Accepted(_) => panic!("report should be skipped"),
        }
    }

    #[test]
    fn test_skips_when_barcode_not_available() {
        let mut report = desktop_report();
        report.asset_id = Some("N/A".to_string());

        assert!(matches!(
            ReportParser::parse_report(&report),
            ReportOutcome::Skipped {
                reason: SkipReason::NoBarcode,
                ..
            }
        ));
    }

    #[test]
    fn test_absent_asset_id_warns_and_keeps_report() {
        let mut report = desktop_report();
        report.asset_id = None;

        let parsed = accepted(ReportParser::parse_report(&report));
        assert_eq!(parsed.record.identity.barcode.as_deref(), Some(""));
        assert!(matches!(
            parsed.anomalies.as_slice(),
            [FieldAnomaly::MissingBarcode { .. }]
        ));
    }

    #[test]
    fn test_extract_model() {
        assert_eq!(ReportParser::extract_model("Dell Inc. [XPS 13]"), "XPS");
        assert_eq!(ReportParser::extract_model("Latitude [Old] [XPS]"), "XPS");
        assert_eq!(ReportParser::extract_model("ThinkPad T480"), "ThinkPad T480");
    }

    #[test]
    fn test_extract_barcode() {
        assert_eq!(
            ReportParser::extract_barcode(Some("Asset Tag 00931")).as_deref(),
            Some("00931")
        );
        assert!(ReportParser::extract_barcode(Some("N/A")).is_none());
        assert!(ReportParser::extract_barcode(Some("   ")).is_none());
        assert!(ReportParser::extract_barcode(None).is_none());
    }

    #[test]
    fn test_cpu_rows_match_available_slots() {
        let mut report = desktop_report();
        report.cpu_2 = Some("Apple M1 (8 cores)".to_string());
        report.cpu_4 = Some("AMD Ryzen 5 3600".to_string());

        let mut anomalies = Vec::new();
        let cpus = ReportParser::extract_cpus(&report, &mut anomalies);

        assert_eq!(cpus.len(), 3);
        assert_eq!(
            cpus.iter().map(|c| c.slot_id.as_str()).collect::<Vec<_>>(),
            vec!["cpu1", "cpu2", "cpu4"]
        );
        assert_eq!(cpus[2].type_code, "");
        assert!(matches!(
            anomalies.as_slice(),
            [FieldAnomaly::UnrecognizedCpu { slot: 4, .. }]
        ));
    }

    #[test]
    fn test_failed_wipe_outcome() {
        let mut report = desktop_report();
        report.wipe_outcome = Some("Storage 1 / Interrupted".to_string());

        let mut anomalies = Vec::new();
        let storages = ReportParser::extract_storages(&report, &mut anomalies);
        assert_eq!(storages[0].wipe_status, WipeStatus::Failed);
        assert_eq!(storages[0].wipe_status_code(), "0");
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_storage_arity_mismatch_is_an_anomaly() {
        let mut report = desktop_report();
        report.storage_2 = Some("Type: HDD, Model: ST500, Size: 500GB".to_string());

        let mut anomalies = Vec::new();
        let storages = ReportParser::extract_storages(&report, &mut anomalies);

        assert_eq!(storages.len(), 2);
        assert_eq!(storages[1].slot_id, "hdd2");
        assert_eq!(storages[1].serial, "");
        assert_eq!(storages[1].wipe_status, WipeStatus::Failed);
        assert!(anomalies
            .iter()
            .all(|a| matches!(a, FieldAnomaly::StorageField { slot: 2, .. })));
        assert!(!anomalies.is_empty());
    }

    #[test]
    fn test_unlisted_slot_is_not_given_another_disks_result() {
        let mut report = desktop_report();
        report.storage_2 = Some("Type: HDD, Model: ST500, Size: 500GB".to_string());
        report.storage_3 = Some("Type: HDD, Model: ST1000, Size: 1TB".to_string());
        report.storage_serial = Some("Storage 1 / S1, Storage 3 / S3".to_string());
        report.wipe_employee = Some("Storage 1 / jdoe, Storage 3 / jdoe".to_string());
        report.wipe_outcome = Some("Storage 1 / Failed, Storage 3 / Successful".to_string());
        report.wipe_method = Some("N/A".to_string());
        report.wipe_started = None;
        report.wipe_finished = None;

        let mut anomalies = Vec::new();
        let storages = ReportParser::extract_storages(&report, &mut anomalies);

        assert_eq!(storages.len(), 3);
        assert_eq!(storages[1].slot_id, "hdd2");
        assert_eq!(storages[1].serial, "");
        assert_eq!(storages[1].wipe_status, WipeStatus::Failed);
        assert_eq!(storages[2].serial, "S3");
        assert_eq!(storages[2].wipe_status, WipeStatus::Passed);
        assert!(anomalies.iter().any(|a| matches!(
            a,
            FieldAnomaly::StorageField {
                slot: 2,
                field: "Data Wipe",
                ..
            }
        )));
        assert!(anomalies
            .iter()
            .all(|a| matches!(a, FieldAnomaly::StorageField { slot: 2, .. })));
    }

    #[test]
    fn test_battery_anomalies() {
        let mut anomalies = Vec::new();
        let mut report = desktop_report();

        report.battery_health = Some("40".to_string());
        assert_eq!(
            ReportParser::extract_battery(&report, &mut anomalies).status_code(),
            "0"
        );
        assert!(anomalies.is_empty());

        report.battery_health = Some("Normal".to_string());
        let battery = ReportParser::extract_battery(&report, &mut anomalies);
        assert_eq!(battery.status_code(), "1");
        assert_eq!(battery.health_value, "Normal");
        assert!(matches!(
            anomalies.last(),
            Some(FieldAnomaly::BatteryHealthNormal { .. })
        ));

        report.battery_health = Some("abc".to_string());
        assert_eq!(
            ReportParser::extract_battery(&report, &mut anomalies).status_code(),
            "0"
        );
        assert!(matches!(
            anomalies.last(),
            Some(FieldAnomaly::BatteryHealthNotNumeric { value, .. }) if value == "abc"
        ));
    }

    #[test]
    fn test_memory_type_requires_third_token() {
        let mut report = desktop_report();
        report.configuration = Some("16GB / 512 GB SSD".to_string());

        let mut anomalies = Vec::new();
        let memory = ReportParser::extract_memory(&report, &mut anomalies);
        assert_eq!(memory.memory_type, "");
        assert_eq!(memory.capacity, "16 GB");
        assert!(matches!(
            anomalies.as_slice(),
            [FieldAnomaly::MalformedConfiguration { .. }]
        ));
    }

    #[test]
    fn test_parse_document_mixed_entries() {
        let body = json!({
            "PCProduct": [
                {"Serial Number": "AAA", "'A' Number": "N/A", "Asset ID": "Tag 1"},
                "not a report",
                {"Serial Number": "BBB", "'A' Number": "A-1", "Asset ID": "Tag 2", "Battery Health": "90"}
            ]
        })
        .to_string();

        let outcomes = ReportParser::parse_document(&body).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(
            outcomes[0],
            ReportOutcome::Skipped {
                reason: SkipReason::NoAssetNumber,
                ..
            }
        ));
        assert!(matches!(
            &outcomes[1],
            ReportOutcome::Skipped {
                reason: SkipReason::Malformed(_),
                ..
            }
        ));
        assert!(matches!(outcomes[2], ReportOutcome::Accepted(_)));
    }

    #[test]
    fn test_parse_document_rejects_wrong_shape() {
        assert!(ReportParser::parse_document("{\"Products\": []}").is_err());
        assert!(ReportParser::parse_document("not json").is_err());
    }
}
