#![doc(test(attr(deny(warnings))))]

//! Budget Console provides the terminal presentation layer for budgeting
//! CLIs: leveled log lines, grouped amounts, banners and framed error reports.

pub mod amount;
pub mod ansi;
pub mod banner;
pub mod clock;
pub mod config;
pub mod errors;
pub mod log;
pub mod report;
pub mod utils;

pub use amount::{format_amount, Amount};
pub use errors::OutputError;
pub use log::{CallerLocation, Console, LineFormatter, LogRecord, Severity};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Console tracing initialized.");
    });
}
