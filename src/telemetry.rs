//! Structured logging setup.
//!
//! Diagnostics go to stderr so stdout stays reserved for the run summary.
//! The filter is read from `GABOR_LOG`, then `RUST_LOG`, defaulting to `warn`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "GABOR_LOG";
const DEFAULT_FILTER: &str = "warn";

static INIT_GUARD: OnceLock<()> = OnceLock::new();

/// Install the global subscriber once per process. Later calls are no-ops.
pub fn init_tracing() {
    INIT_GUARD.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Fails only if an embedding process already installed a subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::debug!("still fine after repeated init");
    }
}
