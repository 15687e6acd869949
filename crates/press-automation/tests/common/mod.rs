// Shared test utilities

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes tracing output for tests. Safe to call from every test;
/// only the first call installs the subscriber. Control verbosity with
/// `RUST_LOG` (e.g. `RUST_LOG=press_automation=trace`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
