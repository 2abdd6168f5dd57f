use std::{fmt, panic::Location};

use chrono::NaiveDateTime;

use super::Severity;

/// Short file name and line of a logging call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    /// Keeps only the last component of `path`.
    pub fn new(path: &str, line: u32) -> Self {
        let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
        Self {
            file: file.to_string(),
            line,
        }
    }

    /// Location of the caller of the function this is invoked from.
    #[track_caller]
    pub fn here() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log event, alive only for a single format-and-emit call.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub severity: Severity,
    pub timestamp: NaiveDateTime,
    pub caller: CallerLocation,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        severity: Severity,
        timestamp: NaiveDateTime,
        caller: CallerLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            timestamp,
            caller,
            message: message.into(),
        }
    }
}
