use std::fmt;
use uuid::Uuid;

/// NewType wrapper for the per-device join key shared by every export row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComputerId(String);

impl ComputerId {
    /// Generates a fresh random identifier, rendered upper-case.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComputerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Device identification fields copied from the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    pub serial: Option<String>,
    pub memory_capacity: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub barcode: Option<String>,
    pub asset_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cpu {
    /// `cpu1`..`cpu4`
    pub slot_id: String,
    pub description: String,
    pub type_code: String,
    pub model: String,
    pub core_count: String,
    pub speed: String,
}

/// Outcome of the secure-erase run on one storage device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeStatus {
    Passed,
    Failed,
}

impl WipeStatus {
    pub fn label(self) -> &'static str {
        match self {
            WipeStatus::Passed => "PASSED",
            WipeStatus::Failed => "FAILED",
        }
    }

    /// Numeric code used by the downstream asset system.
    pub fn code(self) -> &'static str {
        match self {
            WipeStatus::Passed => "1",
            WipeStatus::Failed => "0",
        }
    }
}

impl fmt::Display for WipeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Storage {
    /// `hdd1`..`hdd4`
    pub slot_id: String,
    pub serial: String,
    pub storage_type: String,
    pub model: String,
    pub size_code: String,
    pub operator: String,
    pub wipe_status: WipeStatus,
    pub wipe_method: String,
    pub wipe_started: String,
    pub wipe_finished: String,
}

impl Storage {
    pub fn wipe_status_code(&self) -> &'static str {
        self.wipe_status.code()
    }
}

/// Health reading of the internal battery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Battery {
    pub health_value: String,
    pub healthy: bool,
}

impl Battery {
    pub fn status_code(&self) -> &'static str {
        if self.healthy {
            "1"
        } else {
            "0"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    pub capacity: String,
    pub memory_type: String,
}

/// Structured data extracted for one physical device.
///
/// The computer id is assigned once at construction and never changes.
#[derive(Debug, Clone)]
pub struct DeviceRecord {
    computer_id: ComputerId,
    pub location: String,
    pub identity: Identity,
    pub cpus: Vec<Cpu>,
    pub storages: Vec<Storage>,
    pub battery: Battery,
    pub memory: Memory,
}

impl DeviceRecord {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            computer_id: ComputerId::generate(),
            location: location.into(),
            identity: Identity::default(),
            cpus: Vec::new(),
            storages: Vec::new(),
            battery: Battery::default(),
            memory: Memory::default(),
        }
    }

    pub fn computer_id(&self) -> &ComputerId {
        &self.computer_id
    }
}
