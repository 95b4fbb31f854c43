use std::fmt;

/// A recoverable problem with one field group of a report.
///
/// The affected fields are left empty or defaulted and the report is still
/// exported; each anomaly is logged as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAnomaly {
    MissingBarcode {
        serial: String,
    },
    BatteryHealthNormal {
        serial: String,
    },
    BatteryHealthNotNumeric {
        serial: String,
        value: String,
    },
    BatteryHealthMissing {
        serial: String,
    },
    UnrecognizedCpu {
        serial: String,
        slot: u8,
        descriptor: String,
    },
    MalformedStorageDescriptor {
        serial: String,
        slot: u8,
        descriptor: String,
    },
    StorageField {
        serial: String,
        slot: u8,
        field: &'static str,
        reason: String,
    },
    InvalidWipeTimestamp {
        serial: String,
        slot: u8,
        value: String,
    },
    MalformedConfiguration {
        serial: String,
        value: String,
    },
}

impl fmt::Display for FieldAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldAnomaly::MissingBarcode { serial } => {
                write!(f, "Serial Number '{}' does not have a barcode", serial)
            }
            FieldAnomaly::BatteryHealthNormal { serial } => write!(
                f,
                "Serial Number '{}' reports battery health 'Normal'; treating as healthy",
                serial
            ),
            FieldAnomaly::BatteryHealthNotNumeric { serial, value } => write!(
                f,
                "Serial Number '{}' has non-numeric battery health '{}'",
                serial, value
            ),
            FieldAnomaly::BatteryHealthMissing { serial } => {
                write!(f, "Serial Number '{}' has no battery health reading", serial)
            }
            FieldAnomaly::UnrecognizedCpu {
                serial,
                slot,
                descriptor,
            } => write!(
                f,
                "Serial Number '{}' CPU {} has unrecognized descriptor '{}'",
                serial, slot, descriptor
            ),
            FieldAnomaly::MalformedStorageDescriptor {
                serial,
                slot,
                descriptor,
            } => write!(
                f,
                "Serial Number '{}' Storage {} has malformed descriptor '{}'",
                serial, slot, descriptor
            ),
            FieldAnomaly::StorageField {
                serial,
                slot,
                field,
                reason,
            } => write!(
                f,
                "Serial Number '{}' Storage {} field '{}': {}",
                serial, slot, field, reason
            ),
            FieldAnomaly::InvalidWipeTimestamp {
                serial,
                slot,
                value,
            } => write!(
                f,
                "Serial Number '{}' Storage {} has unreadable wipe timestamp '{}'",
                serial, slot, value
            ),
            FieldAnomaly::MalformedConfiguration { serial, value } => write!(
                f,
                "Serial Number '{}' has no memory type in configuration '{}'",
                serial, value
            ),
        }
    }
}

/// Why a whole report was dropped without producing a device record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The asset-tracking ("'A' Number") field is "N/A".
    NoAssetNumber,
    /// The barcode source ("Asset ID") field is "N/A".
    NoBarcode,
    /// The entry is not a JSON object.
    Malformed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoAssetNumber => write!(f, "does not have an A Number"),
            SkipReason::NoBarcode => write!(f, "does not have a barcode"),
            SkipReason::Malformed(details) => write!(f, "is not a valid report ({})", details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_messages_name_the_device() {
        let anomaly = FieldAnomaly::BatteryHealthNotNumeric {
            serial: "5CG1234".to_string(),
            value: "abc".to_string(),
        };
        let message = anomaly.to_string();
        assert!(message.contains("5CG1234"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::NoAssetNumber.to_string(), "does not have an A Number");
        assert!(SkipReason::Malformed("entry 3".to_string())
            .to_string()
            .contains("entry 3"));
    }
}
