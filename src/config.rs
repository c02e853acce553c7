//! Server settings read from the environment (and `.env`, when present).
//!
//! Leptos' own options (site address, asset paths) still come from
//! `get_configuration`; this only covers what the binary adds on top.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "chronopolis=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing` filter directives, from `RUST_LOG`.
    pub log_filter: String,
    /// Set when `PRODUCTION` is present; switches logs to the compact format.
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            log_filter,
            production: lookup("PRODUCTION").is_some(),
        }
    }

    /// Installs the global subscriber. An unparsable filter falls back to the
    /// default rather than silencing the server.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        if self.production {
            subscriber.compact().init();
        } else {
            subscriber.init();
        }
    }
}
