use crate::asset_export::domain::{CompiledRecord, ExportRow};
use crate::ports::outbound::RecordFormatter;

/// TabDelimitedFormatter adapter for the asset-management import format
///
/// Every cell is wrapped in double quotes and cells are separated by a tab;
/// each row ends with `\n`. A cell can never break its row: tabs and line
/// breaks inside a value become spaces and embedded quotes are doubled.
pub struct TabDelimitedFormatter;

impl TabDelimitedFormatter {
    pub fn new() -> Self {
        Self
    }

    fn quote(cell: &str) -> String {
        let mut quoted = String::with_capacity(cell.len() + 2);
        quoted.push('"');
        for c in cell.chars() {
            match c {
                '\t' | '\r' | '\n' => quoted.push(' '),
                '"' => quoted.push_str("\"\""),
                other => quoted.push(other),
            }
        }
        quoted.push('"');
        quoted
    }

    fn format_row(row: &ExportRow) -> String {
        row.cells()
            .iter()
            .map(|cell| Self::quote(cell))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

impl Default for TabDelimitedFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordFormatter for TabDelimitedFormatter {
    fn format(&self, record: &CompiledRecord) -> String {
        let mut output = String::new();
        for row in record.rows() {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }
        output
    }
}
