use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing the report to stdout
///
/// The report is written in one go and terminated with a newline.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }

    fn write_to<W: Write>(mut writer: W, content: &str) -> Result<()> {
        write_terminated(&mut writer, content).map_err(|e| ReportError::OutputError {
            details: format!("Failed to write to stdout: {}", e),
        })?;
        Ok(())
    }
}

fn write_terminated<W: Write>(writer: &mut W, content: &str) -> io::Result<()> {
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        Self::write_to(io::stdout().lock(), content)
    }
}
