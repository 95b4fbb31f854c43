use crate::asset_export::domain::CompiledRecord;

/// RecordFormatter port for rendering compiled rows into export file content
pub trait RecordFormatter {
    /// Renders every row of the record, in file order, as one string
    fn format(&self, record: &CompiledRecord) -> String;
}
