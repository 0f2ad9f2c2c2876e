/// Formatter adapters for rendering duplication reports
mod json_formatter;

pub use json_formatter::JsonReportFormatter;
