//! Logging bootstrap.
//!
//! The crate only emits `tracing` events; hosts that don't install their own
//! subscriber can call [`init_logging`] once at startup.
//!
//! `RUST_LOG` takes precedence over the filter passed in. Initialization is
//! idempotent: later calls return `Ok` and keep the first filter.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

static ACTIVE_FILTER: OnceCell<String> = OnceCell::new();

/// Install a formatted stderr subscriber.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `"ideaboard=debug"`.
/// Pass `None` for the crate default.
pub fn init_logging(filter: Option<&str>) -> Result<()> {
    ACTIVE_FILTER.get_or_try_init(|| -> Result<String> {
        let directives = filter.unwrap_or(DEFAULT_LOG_FILTER);
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(from_env) => from_env,
            Err(_) => EnvFilter::try_new(directives)
                .with_context(|| format!("invalid log filter `{directives}`"))?,
        };
        let active = env_filter.to_string();

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

        info!(filter = %active, version = env!("CARGO_PKG_VERSION"), "Logging initialized");
        Ok(active)
    })?;
    Ok(())
}

/// The filter in effect, once logging has been initialized.
pub fn active_filter() -> Option<&'static str> {
    ACTIVE_FILTER.get().map(String::as_str)
}
