use std::env;
use std::path::PathBuf;

/// Configuration for the client-local session store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backing file for the session store; `None` keeps state in memory only.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_PATH: Backing file path (default: "shopwave-store.json";
    ///   the literal value "memory" disables the backing file)
    pub fn from_env() -> Self {
        let raw = env::var("STORE_PATH").unwrap_or_else(|_| "shopwave-store.json".to_string());
        let path = if raw == "memory" {
            None
        } else {
            Some(PathBuf::from(raw))
        };

        Self { path }
    }
}
