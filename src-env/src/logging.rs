//! Logging initialisation

use crate::constants::DEFAULT_LOG_FILTER;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise `env_logger` for the current process.
///
/// Honours `RUST_LOG`, falls back to `info`. Safe to call more than once;
/// only the first call installs the logger.
pub fn init_logging() {
    INIT.call_once(|| {
        // try_init: a test harness or host binary may already own the logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
        )
        .try_init();
        log::debug!("quadcheck logging initialised (v{})", env!("CARGO_PKG_VERSION"));
    });
}
