use super::device_record::ComputerId;

/// Number of columns in every export row, regardless of row type.
pub const ROW_WIDTH: usize = 15;

/// Row type discriminator written in the third column of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Comp,
    Cpu,
    Hdd,
    Bat,
    Mem,
}

impl RowKind {
    /// The tag the asset system expects on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            RowKind::Comp => "comp",
            RowKind::Cpu => "cpu",
            RowKind::Hdd => "hd",
            RowKind::Bat => "bat",
            RowKind::Mem => "mem",
        }
    }

    /// Column layout for this row type. Downstream import is positional.
    pub fn columns(self) -> &'static [&'static str; ROW_WIDTH] {
        match self {
            RowKind::Comp => &COMP_COLUMNS,
            RowKind::Cpu => &CPU_COLUMNS,
            RowKind::Hdd => &HDD_COLUMNS,
            RowKind::Bat => &BAT_COLUMNS,
            RowKind::Mem => &MEM_COLUMNS,
        }
    }
}

const COMP_COLUMNS: [&str; ROW_WIDTH] = [
    "location",
    "computer_id",
    "row_type",
    "component_id",
    "serial_number",
    "memory",
    "manufacturer",
    "model",
    "barcode",
    "brand",
    "reserved_10",
    "reserved_11",
    "asset_number",
    "reserved_13",
    "reserved_14",
];

const CPU_COLUMNS: [&str; ROW_WIDTH] = [
    "location",
    "computer_id",
    "row_type",
    "component_id",
    "description",
    "cores",
    "type_code",
    "speed",
    "model",
    "reserved_9",
    "reserved_10",
    "reserved_11",
    "reserved_12",
    "reserved_13",
    "reserved_14",
];

const HDD_COLUMNS: [&str; ROW_WIDTH] = [
    "location",
    "computer_id",
    "row_type",
    "component_id",
    "serial_number",
    "size",
    "quantity",
    "wipe_status_code",
    "operator",
    "wipe_status",
    "wipe_started",
    "wipe_finished",
    "type",
    "wipe_method",
    "reserved_14",
];

const BAT_COLUMNS: [&str; ROW_WIDTH] = [
    "location",
    "computer_id",
    "row_type",
    "component_id",
    "reserved_4",
    "reserved_5",
    "reserved_6",
    "status_code",
    "reserved_8",
    "reserved_9",
    "reserved_10",
    "reserved_11",
    "reserved_12",
    "reserved_13",
    "health",
];

const MEM_COLUMNS: [&str; ROW_WIDTH] = [
    "location",
    "computer_id",
    "row_type",
    "component_id",
    "capacity",
    "type",
    "reserved_6",
    "reserved_7",
    "reserved_8",
    "reserved_9",
    "reserved_10",
    "reserved_11",
    "reserved_12",
    "reserved_13",
    "reserved_14",
];

/// One fixed-width export row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    kind: RowKind,
    cells: [String; ROW_WIDTH],
}

impl ExportRow {
    /// Starts a row with the location, computer id and row tag filled in.
    pub fn builder(kind: RowKind, location: &str, computer_id: &ComputerId) -> ExportRowBuilder {
        let mut cells: [String; ROW_WIDTH] = Default::default();
        cells[0] = location.to_string();
        cells[1] = computer_id.to_string();
        cells[2] = kind.tag().to_string();
        ExportRowBuilder { kind, cells }
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Looks a cell up by its column name.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.kind
            .columns()
            .iter()
            .position(|c| *c == column)
            .map(|i| self.cells[i].as_str())
    }
}

/// Fills the remaining cells of a row by column position.
///
/// Positions beyond the row width are ignored; unset cells stay empty.
pub struct ExportRowBuilder {
    kind: RowKind,
    cells: [String; ROW_WIDTH],
}

impl ExportRowBuilder {
    pub fn set(mut self, position: usize, value: impl Into<String>) -> Self {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = value.into();
        }
        self
    }

    pub fn set_opt(self, position: usize, value: Option<&str>) -> Self {
        self.set(position, value.unwrap_or_default())
    }

    pub fn build(self) -> ExportRow {
        ExportRow {
            kind: self.kind,
            cells: self.cells,
        }
    }
}

/// The export rows of one device in file order.
#[derive(Debug, Clone)]
pub struct CompiledRecord {
    pub computer_id: ComputerId,
    pub serial: String,
    pub barcode: String,
    pub comp: ExportRow,
    pub cpus: Vec<ExportRow>,
    pub storages: Vec<ExportRow>,
    pub battery: ExportRow,
    pub memory: ExportRow,
}

impl CompiledRecord {
    /// Rows in file order: comp, cpus, storages, battery, memory.
    pub fn rows(&self) -> impl Iterator<Item = &ExportRow> {
        std::iter::once(&self.comp)
            .chain(self.cpus.iter())
            .chain(self.storages.iter())
            .chain(std::iter::once(&self.battery))
            .chain(std::iter::once(&self.memory))
    }

    pub fn row_count(&self) -> usize {
        3 + self.cpus.len() + self.storages.len()
    }
}
