//! Framed error output. Reporting only displays a failure; the caller still
//! decides how to propagate it.

use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error,
    io::Write,
    iter,
};

use colored::Color;

use crate::{
    ansi,
    banner::center,
    clock::Clock,
    config::ConsoleConfig,
    errors::OutputError,
    log::{CallerLocation, Console, Severity},
};

/// Messages of `err` and each of its sources, outermost first.
pub fn cause_chain(err: &(dyn Error + 'static)) -> Vec<String> {
    iter::successors(Some(err), |current| (*current).source())
        .map(ToString::to_string)
        .collect()
}

/// Writes error messages between `#` rules of a fixed width.
#[derive(Debug, Clone, Copy)]
pub struct ErrorBlock {
    width: usize,
}

impl Default for ErrorBlock {
    fn default() -> Self {
        Self {
            width: ConsoleConfig::default_error_width(),
        }
    }
}

impl ErrorBlock {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::new(config.error_width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn rule(&self, label: &str) -> String {
        format!(
            "{}\n",
            center(&ansi::paint(label, Color::Red), self.width, '#')
        )
    }

    /// Reports a failure that has no underlying error value.
    #[track_caller]
    pub fn report<W: Write, C: Clock>(
        &self,
        console: &Console<W, C>,
        message: &str,
    ) -> Result<(), OutputError> {
        let caller = CallerLocation::here();
        console.write_raw(format!("\n{}\n", self.rule(" ERROR ")))?;
        console.log_at(Severity::Error, caller, ansi::paint(message, Color::Red))?;
        console.write_raw(format!("\n{}", self.rule(" ERROR END ")))
    }

    /// Reports `message` together with `err`, its sources and, when
    /// `RUST_BACKTRACE` is enabled, a backtrace of the reporting site.
    #[track_caller]
    pub fn report_with_source<W: Write, C: Clock>(
        &self,
        console: &Console<W, C>,
        err: &(dyn Error + 'static),
        message: &str,
    ) -> Result<(), OutputError> {
        let caller = CallerLocation::here();
        console.write_raw(format!("\n{}\n", self.rule(" ERROR ")))?;
        console.log_at(
            Severity::Error,
            caller.clone(),
            ansi::paint(message, Color::Red),
        )?;
        console.log_at(
            Severity::Error,
            caller,
            ansi::paint(format!("Original message: {err}"), Color::Red),
        )?;

        let mut trace = String::from("\n[exception backtrace]:\n\n");
        for (depth, cause) in cause_chain(err).iter().enumerate() {
            trace.push_str(&format!("{depth:>4}: {cause}\n"));
        }
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            trace.push_str(&format!("\n{backtrace}\n"));
        }
        trace.push('\n');
        console.write_raw(trace)?;
        console.write_raw(self.rule(" ERROR END "))
    }
}

/// [`ErrorBlock::report`] at the default width.
#[track_caller]
pub fn error_block<W: Write, C: Clock>(
    console: &Console<W, C>,
    message: &str,
) -> Result<(), OutputError> {
    ErrorBlock::default().report(console, message)
}

/// [`ErrorBlock::report_with_source`] at the default width.
#[track_caller]
pub fn error_block_with_source<W: Write, C: Clock>(
    console: &Console<W, C>,
    err: &(dyn Error + 'static),
    message: &str,
) -> Result<(), OutputError> {
    ErrorBlock::default().report_with_source(console, err, message)
}
