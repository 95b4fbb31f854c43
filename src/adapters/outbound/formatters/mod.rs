/// Formatter adapters for export file content
mod tab_delimited_formatter;

pub use tab_delimited_formatter::TabDelimitedFormatter;
