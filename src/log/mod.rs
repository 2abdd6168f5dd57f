//! Leveled, colored log lines and the sinks that emit them.

pub mod console;
pub mod event_format;
pub mod line;
pub mod record;
pub mod severity;

pub use console::Console;
pub use event_format::{install, LineEventFormat};
pub use line::{LineFormatter, TIMESTAMP_FORMAT};
pub use record::{CallerLocation, LogRecord};
pub use severity::Severity;
