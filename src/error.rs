//! Error types
//!
//! Handler errors never leave the request handler; they are turned into a 500 response.
//! Client errors end the client process with a message on stderr.

use thiserror::Error;

/// Internal fault while producing a response
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON resource: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body stream failed: {0}")]
    Body(String),

    #[error("failed to build response: {0}")]
    Response(#[from] hyper::http::Error),
}

/// Failure while assembling or sending a client request
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid request template: {0}")]
    Template(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Uri(#[from] hyper::http::uri::InvalidUri),

    #[error("failed to build request: {0}")]
    Http(#[from] hyper::http::Error),

    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
}
