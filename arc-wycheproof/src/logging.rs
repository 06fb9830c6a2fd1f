//! Tracing setup for test binaries.
//!
//! Mismatch warnings from [`check_alg_and_version`](crate::check_alg_and_version)
//! only show up once a subscriber is installed. Tests call
//! [`init_test_tracing`] at the top; repeated calls are no-ops.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is unset
    pub log_level: Level,
    /// Route output through the test harness capture
    pub test_writer: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_level: Level::INFO, test_writer: true }
    }
}

impl LoggingConfig {
    /// Enable debug logging
    #[must_use]
    pub fn debug() -> Self {
        Self { log_level: Level::DEBUG, ..Default::default() }
    }
}

/// Installs a global subscriber for `config`.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::builder().with_default_directive(config.log_level.into()).from_env_lossy();

    let layer = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.test_writer {
        registry.with(layer.with_test_writer()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    result.is_ok()
}

/// Installs the default test subscriber if none is present.
pub fn init_test_tracing() {
    let _ = init_tracing(&LoggingConfig::default());
}
