pub mod paths;
pub(crate) mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_LEVEL: &str = "warn";

/// Initializes the global tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: Option<&str>) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directive = format!("smartbudget={}", level.unwrap_or(DEFAULT_LEVEL));
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&directive))
            .unwrap_or_else(|_| EnvFilter::new(format!("smartbudget={DEFAULT_LEVEL}")));

        // A subscriber installed by the host process takes precedence.
        if let Err(err) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            tracing::debug!(error = %err, "keeping the existing tracing subscriber");
        }
    });
}
