use serde::{Deserialize, Serialize};

use crate::log::Severity;

/// Console presentation settings. Hosts embed this in their own config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub min_severity: Severity,
    #[serde(default = "ConsoleConfig::default_section_width")]
    pub section_width: usize,
    #[serde(default = "ConsoleConfig::default_error_width")]
    pub error_width: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_severity: Severity::default(),
            section_width: Self::default_section_width(),
            error_width: Self::default_error_width(),
        }
    }
}

impl ConsoleConfig {
    pub fn default_section_width() -> usize {
        132
    }

    pub fn default_error_width() -> usize {
        100
    }
}
