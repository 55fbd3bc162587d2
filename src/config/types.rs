// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory `/?filePath=` targets are resolved against
    pub files_dir: PathBuf,
    /// Seconds a body read or a connection may stall, 0 disables
    pub read_timeout: u64,
    /// Value of the `Server` header on OPTIONS responses
    pub server_name: String,
    /// Largest request body accepted, in bytes
    pub max_body_size: u64,
}

impl ServerConfig {
    pub const fn read_timeout(&self) -> Option<Duration> {
        if self.read_timeout == 0 {
            None
        } else {
            Some(Duration::from_secs(self.read_timeout))
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Echo log lines to stdout
    pub verbose: bool,
    /// Append log lines to `log_file`
    pub file_logging: bool,
    pub log_file: PathBuf,
}
