//! Minimal HTTP request/response exchange pair.
//!
//! The server validates each request's content type and method, serves files for
//! `GET /?filePath=<path>`, acknowledges POST bodies, and answers OPTIONS with its capabilities.
//! The client sends a single request assembled from flags or a JSON template.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
