use chrono::NaiveDateTime;

use super::{CallerLocation, LogRecord, Severity};
use crate::{ansi, errors::OutputError};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders log records as single styled terminal lines:
///
/// ```text
/// 2024-03-01 09:15:00 INFO  [@main.rs:42] - Ledger loaded
/// ```
///
/// The severity label is colored and padded to a fixed column; the caller
/// and message tail is bold. Every line ends with `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineFormatter;

impl LineFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, record: &LogRecord) -> String {
        let label = record.severity.as_str();
        let pad = " ".repeat(Severity::LABEL_WIDTH.saturating_sub(label.len()));
        let tail = format!(" [@{}] - {}", record.caller, record.message);
        format!(
            "{} {}{pad}{}\n",
            record.timestamp.format(TIMESTAMP_FORMAT),
            ansi::paint(label, record.severity.color()),
            ansi::bold(tail)
        )
    }

    pub fn format_parts(
        &self,
        severity: Severity,
        timestamp: NaiveDateTime,
        caller: CallerLocation,
        message: &str,
    ) -> String {
        self.format(&LogRecord::new(severity, timestamp, caller, message))
    }

    /// Like [`format_parts`](Self::format_parts) but takes the severity by name.
    pub fn format_named(
        &self,
        severity: &str,
        timestamp: NaiveDateTime,
        caller: CallerLocation,
        message: &str,
    ) -> Result<String, OutputError> {
        let severity = severity.parse::<Severity>()?;
        Ok(self.format_parts(severity, timestamp, caller, message))
    }
}
