pub mod clock;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

pub use clock::{Clock, FixedClock, SystemClock};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "budge_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// A non-empty `RUST_LOG` replaces the default filter entirely; when it is
/// unset, blank or unparsable the crate logs at `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(rust_log.as_deref());

        // A subscriber may already be installed by an embedding application.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
