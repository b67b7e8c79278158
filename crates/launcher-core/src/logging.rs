//! Diagnostic logging setup
//!
//! The tool owns stdout and stderr, so launcher diagnostics stay quiet unless
//! `LUA_TOOLS_LOG` asks for them (e.g. `LUA_TOOLS_LOG=debug`).

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "LUA_TOOLS_LOG";

/// Filter used when `LUA_TOOLS_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber; later calls are no-ops
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt::Subscriber::builder()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
