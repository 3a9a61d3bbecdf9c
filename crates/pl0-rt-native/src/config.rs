use once_cell::sync::OnceCell;

pub const ENV_LOG: &str = "PL0_RT_LOG";
pub const ENV_LOG_ANSI: &str = "PL0_RT_LOG_ANSI";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeConfig {
    /// `tracing` filter directive; `None` leaves logging uninstalled.
    pub log_filter: Option<String>,
    pub log_ansi: bool,
}

static CONFIG: OnceCell<RuntimeConfig> = OnceCell::new();

fn parse_bool(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

impl RuntimeConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(ENV_LOG)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let log_ansi = lookup(ENV_LOG_ANSI)
            .and_then(|v| parse_bool(v.trim()))
            .unwrap_or(false);
        RuntimeConfig {
            log_filter,
            log_ansi,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }
}

/// Process-wide configuration, read from the environment on first use.
pub fn config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(RuntimeConfig::from_env)
}
