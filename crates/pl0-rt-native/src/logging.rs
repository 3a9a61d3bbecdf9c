//! Diagnostics for the bridge. Everything goes to stderr so the compiled
//! program's stdout stays byte-exact.

use std::io;

use tracing_subscriber::EnvFilter;

use crate::config::RuntimeConfig;

/// Installs the stderr subscriber when `cfg` names a filter. Returns whether
/// a subscriber was installed by this call.
pub fn init(cfg: &RuntimeConfig) -> bool {
    let Some(directive) = cfg.log_filter.as_deref() else {
        return false;
    };
    let filter = match EnvFilter::try_new(directive) {
        Ok(filter) => filter,
        Err(err) => {
            eprintln!("pl0-rt: ignoring invalid log filter {directive:?}: {err}");
            return false;
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(cfg.log_ansi)
        .without_time()
        .try_init()
        .is_ok()
}
