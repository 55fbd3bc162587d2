//! Logger module
//!
//! A fire-and-forget trace sink for the server:
//! - Console echo (`log: <message>` on stdout)
//! - Append-only log file, removed at startup
//!
//! The sink is a plain value created once in `main` and shared through `AppState`.
//! Logging never fails and never panics.

pub mod writer;

use crate::config::LoggingConfig;
use hyper::HeaderMap;
use std::net::SocketAddr;
use writer::LogFile;

pub struct Logger {
    verbose: bool,
    file: Option<LogFile>,
}

impl Logger {
    /// Initialize the logger from configuration
    ///
    /// Any log file from a previous run is removed, even when file logging is off.
    pub fn init(config: &LoggingConfig) -> Self {
        writer::remove_previous(&config.log_file);

        let file = if config.file_logging {
            match LogFile::open(&config.log_file) {
                Ok(f) => Some(f),
                Err(e) => {
                    eprintln!(
                        "[LOGGER] Failed to open log file '{}': {e}",
                        config.log_file.display()
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            verbose: config.verbose,
            file,
        }
    }

    /// Logger that discards every message
    pub const fn silent() -> Self {
        Self {
            verbose: false,
            file: None,
        }
    }

    pub fn log(&self, message: &str) {
        if self.verbose {
            println!("log: {message}");
        }
        if let Some(file) = &self.file {
            file.write_line(message);
        }
    }

    pub fn log_warning(&self, message: &str) {
        self.log(&format!("[WARN] {message}"));
    }

    pub fn log_error(&self, message: &str) {
        self.log(&format!("[ERROR] {message}"));
    }

    pub fn log_server_start(&self, host: &str, addr: &SocketAddr) {
        self.log(&format!(
            "Server is up and running on http://{host}:{} ({addr})",
            addr.port()
        ));
    }

    pub fn log_connection_accepted(&self, peer_addr: &SocketAddr) {
        self.log(&format!("[Connection] Accepted from: {peer_addr}"));
    }

    pub fn log_connection_error(&self, err: &impl std::fmt::Debug) {
        self.log_error(&format!("Failed to serve connection: {err:?}"));
    }

    /// Log the headers the handler cares about
    pub fn log_request_headers(&self, headers: &HeaderMap) {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string()
        };
        self.log(&format!(
            "Processed Headers for request: Content-type: {}, Host: {}, Accept: {}, From: {}",
            get("content-type"),
            get("host"),
            get("accept"),
            get("from"),
        ));
    }
}
