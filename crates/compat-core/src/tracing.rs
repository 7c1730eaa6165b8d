//! Tracing bootstrap for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the default log filter.
pub const LOG_ENV_VAR: &str = "COMPAT_LOG";

/// Install a global fmt subscriber honoring `COMPAT_LOG` (default `warn`).
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init() {
    init_with_filter(None);
}

/// Install a global fmt subscriber with an explicit filter directive,
/// falling back to `COMPAT_LOG` / `warn` when `filter` is `None`.
pub fn init_with_filter(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
