use std::{
    fmt,
    io::{self, Stdout, Write},
    sync::{Mutex, PoisonError},
};

use super::{CallerLocation, LineFormatter, LogRecord, Severity};
use crate::{
    clock::{Clock, SystemClock},
    config::ConsoleConfig,
    errors::OutputError,
};

/// A line formatter bound to an output stream and a clock.
///
/// Construct one at startup and hand it to whatever needs to log. Writes are
/// serialized through an internal mutex so a console can be shared across
/// threads behind an `Arc`.
pub struct Console<W: Write, C: Clock = SystemClock> {
    formatter: LineFormatter,
    writer: Mutex<W>,
    clock: C,
    min_severity: Severity,
}

impl Console<Stdout, SystemClock> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), SystemClock)
    }
}

impl<W: Write, C: Clock> Console<W, C> {
    pub fn new(writer: W, clock: C) -> Self {
        Self {
            formatter: LineFormatter::new(),
            writer: Mutex::new(writer),
            clock,
            min_severity: Severity::default(),
        }
    }

    pub fn from_config(writer: W, clock: C, config: &ConsoleConfig) -> Self {
        Self::new(writer, clock).with_min_severity(config.min_severity)
    }

    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) -> Result<(), OutputError> {
        self.log(Severity::Debug, message)
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) -> Result<(), OutputError> {
        self.log(Severity::Info, message)
    }

    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) -> Result<(), OutputError> {
        self.log(Severity::Warn, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) -> Result<(), OutputError> {
        self.log(Severity::Error, message)
    }

    /// Logs `message`, attributing it to the caller of this method.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) -> Result<(), OutputError> {
        self.log_at(severity, CallerLocation::here(), message)
    }

    pub fn log_at(
        &self,
        severity: Severity,
        caller: CallerLocation,
        message: impl fmt::Display,
    ) -> Result<(), OutputError> {
        if !self.enabled(severity) {
            tracing::trace!(%severity, min = %self.min_severity, "record below threshold");
            return Ok(());
        }
        let record = LogRecord::new(severity, self.clock.now(), caller, message.to_string());
        self.write_raw(self.formatter.format(&record))
    }

    /// Writes `text` verbatim, sharing the lock with log lines.
    pub fn write_raw(&self, text: impl AsRef<str>) -> Result<(), OutputError> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(text.as_ref().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
