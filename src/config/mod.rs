// Configuration module entry point
// Loads configuration from file, environment and command-line flags

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig};

use crate::cli::ServerArgs;

impl Config {
    /// Load configuration for the given command-line arguments
    ///
    /// Precedence, lowest first: defaults, config file (optional), `EXCHANGE_*` environment,
    /// command-line flags.
    pub fn load(args: &ServerArgs) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&args.config).required(false))
            .add_source(config::Environment::with_prefix("EXCHANGE").separator("__"))
            .set_default("server.host", "localhost")?
            .set_default("server.port", 8000)?
            .set_default("server.files_dir", "./files")?
            .set_default("server.read_timeout", 30)?
            .set_default("server.server_name", env!("CARGO_PKG_NAME"))?
            .set_default("server.max_body_size", 10_485_760)? // 10MB
            .set_default("logging.verbose", true)?
            .set_default("logging.file_logging", false)?
            .set_default("logging.log_file", "./server-logs.log")?
            .set_override_option("server.port", args.port.map(i64::from))?
            .set_override_option("logging.verbose", args.verbose)?
            .set_override_option("logging.file_logging", args.logging)?
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the listen address, `localhost` included
    pub async fn resolve_socket_addr(&self) -> Result<SocketAddr, String> {
        let target = format!("{}:{}", self.server.host, self.server.port);
        let mut addrs = tokio::net::lookup_host(&target)
            .await
            .map_err(|e| format!("Invalid address '{target}': {e}"))?;
        addrs
            .next()
            .ok_or_else(|| format!("Address '{target}' did not resolve"))
    }
}
