use thiserror::Error;

/// Failures surfaced by the console formatting helpers.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Invalid amount: {0} is not a finite number")]
    InvalidAmount(f64),
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
