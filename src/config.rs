//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory for the persistent tier
    pub data_dir: PathBuf,
    /// Cache capacity in entries (not bytes)
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DATA_DIR` - Root directory for persisted values (default: ./data)
    /// - `CACHE_CAPACITY` - Cache capacity in entries (default: 1024)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    ///
    /// A `CACHE_CAPACITY` of 0 is passed through as-is; store construction
    /// rejects it, which surfaces the misconfiguration fatally at startup.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            cache_capacity: 1024,
            server_port: 8080,
        }
    }
}
