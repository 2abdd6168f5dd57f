/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub name: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// One-line summary, e.g.
    /// `0.0.1 (3f2a9c1, clean, built 2024-05-01 10:00:00, x86_64-unknown-linux-gnu/debug, rustc 1.79.0)`.
    pub fn long_version(&self) -> String {
        format!(
            "{} ({}, {}, built {}, {}/{}, {})",
            self.version,
            self.git_hash,
            self.git_status,
            self.timestamp,
            self.target,
            self.profile,
            self.rustc
        )
    }
}

/// CLI semantic version derived from the crate metadata.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("BUDGET_CONSOLE_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("BUDGET_CONSOLE_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("BUDGET_CONSOLE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("BUDGET_CONSOLE_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("BUDGET_CONSOLE_BUILD_PROFILE").unwrap_or("unknown"),
        rustc: option_env!("BUDGET_CONSOLE_BUILD_RUSTC").unwrap_or("unknown"),
    }
}
