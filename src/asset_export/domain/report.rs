use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Literal placeholder the disposition tool writes for "not available".
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of CPU and storage descriptor slots in a report.
pub const SLOT_COUNT: u8 = 4;

/// Top-level shape of an inbound report file.
///
/// Entries are kept as raw JSON so that one malformed entry can be dropped
/// without losing the rest of the batch.
#[derive(Debug, Deserialize)]
pub struct ReportDocument {
    #[serde(rename = "PCProduct")]
    pub products: Vec<Value>,
}

/// One physical device as described by the disposition tool.
///
/// Every field is optional: the tool omits fields freely and sometimes emits
/// numbers where text is expected, so values are read leniently.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Report {
    #[serde(rename = "Securaze User", default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(rename = "Serial Number", default, deserialize_with = "lenient_text")]
    pub serial_number: Option<String>,
    #[serde(rename = "RAM", default, deserialize_with = "lenient_text")]
    pub ram: Option<String>,
    #[serde(rename = "Vendor", default, deserialize_with = "lenient_text")]
    pub vendor: Option<String>,
    #[serde(rename = "Model", default, deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(rename = "Asset ID", default, deserialize_with = "lenient_text")]
    pub asset_id: Option<String>,
    #[serde(rename = "'A' Number", default, deserialize_with = "lenient_text")]
    pub asset_number: Option<String>,

    #[serde(rename = "CPU 1", default, deserialize_with = "lenient_text")]
    pub cpu_1: Option<String>,
    #[serde(rename = "CPU 2", default, deserialize_with = "lenient_text")]
    pub cpu_2: Option<String>,
    #[serde(rename = "CPU 3", default, deserialize_with = "lenient_text")]
    pub cpu_3: Option<String>,
    #[serde(rename = "CPU 4", default, deserialize_with = "lenient_text")]
    pub cpu_4: Option<String>,

    #[serde(rename = "Storage 1", default, deserialize_with = "lenient_text")]
    pub storage_1: Option<String>,
    #[serde(rename = "Storage 2", default, deserialize_with = "lenient_text")]
    pub storage_2: Option<String>,
    #[serde(rename = "Storage 3", default, deserialize_with = "lenient_text")]
    pub storage_3: Option<String>,
    #[serde(rename = "Storage 4", default, deserialize_with = "lenient_text")]
    pub storage_4: Option<String>,

    #[serde(rename = "Storage Serial", default, deserialize_with = "lenient_text")]
    pub storage_serial: Option<String>,
    #[serde(rename = "Data Wipe Employee", default, deserialize_with = "lenient_text")]
    pub wipe_employee: Option<String>,
    #[serde(rename = "Data Wipe", default, deserialize_with = "lenient_text")]
    pub wipe_outcome: Option<String>,
    #[serde(rename = "Data Wipe Method", default, deserialize_with = "lenient_text")]
    pub wipe_method: Option<String>,
    #[serde(rename = "Data Wipe Started", default, deserialize_with = "lenient_text")]
    pub wipe_started: Option<String>,
    #[serde(rename = "Data Wipe Finished", default, deserialize_with = "lenient_text")]
    pub wipe_finished: Option<String>,

    #[serde(rename = "Battery Health", default, deserialize_with = "lenient_text")]
    pub battery_health: Option<String>,
    #[serde(rename = "Configuration", default, deserialize_with = "lenient_text")]
    pub configuration: Option<String>,
}

impl Report {
    /// CPU descriptor for slot 1..=4.
    pub fn cpu_slot(&self, slot: u8) -> Option<&str> {
        match slot {
            1 => self.cpu_1.as_deref(),
            2 => self.cpu_2.as_deref(),
            3 => self.cpu_3.as_deref(),
            4 => self.cpu_4.as_deref(),
            _ => None,
        }
    }

    /// Storage descriptor for slot 1..=4.
    pub fn storage_slot(&self, slot: u8) -> Option<&str> {
        match slot {
            1 => self.storage_1.as_deref(),
            2 => self.storage_2.as_deref(),
            3 => self.storage_3.as_deref(),
            4 => self.storage_4.as_deref(),
            _ => None,
        }
    }

    /// Serial number used to identify the device in log messages.
    pub fn display_serial(&self) -> &str {
        self.serial_number.as_deref().unwrap_or("<no serial>")
    }
}

/// Returns true for the "N/A" sentinel.
pub fn is_not_available(value: Option<&str>) -> bool {
    value.map(str::trim) == Some(NOT_AVAILABLE)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
