pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the default `tracing` subscriber for this crate's diagnostics,
/// writing to stderr so it never interleaves with console output.
///
/// `RUST_LOG` directives are honored; without them only `budget_console`
/// events at INFO and above are shown, other targets at ERROR.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "budget_console=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let installed = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        if installed.is_err() {
            // A host subscriber (e.g. `log::install`) already owns the global slot.
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
