//! Supported content types and methods
//!
//! Fixed, process-wide sets the admission check and the capability responses are built from.

use hyper::Method;

/// Content types the server accepts, in the order they are advertised
pub const SUPPORTED_CONTENT_TYPES: [&str; 7] = [
    "text/plain",
    "text/css",
    "text/html",
    "image/svg+xml",
    "application/json",
    "application/javascript",
    "image/png",
];

/// Methods the server dispatches, in the order they are advertised
pub const SUPPORTED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Content types served as UTF-8 text on GET
pub const TEXT_CONTENT_TYPES: [&str; 5] = [
    "text/html",
    "text/css",
    "text/plain",
    "application/javascript",
    "image/svg+xml",
];

pub const PNG_CONTENT_TYPE: &str = "image/png";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Comma-joined list of supported methods (`GET, POST, OPTIONS`)
pub fn allowed_methods() -> String {
    SUPPORTED_METHODS
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-joined list of supported content types
pub fn allowed_content_types() -> String {
    SUPPORTED_CONTENT_TYPES.join(", ")
}

/// Extract the lower-cased media type from a Content-Type value, dropping parameters
///
/// `Text/Plain; charset=utf-8` becomes `text/plain`.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Case-insensitive membership test against [`SUPPORTED_CONTENT_TYPES`]
pub fn is_supported_content_type(content_type: &str) -> bool {
    let media = media_type(content_type);
    SUPPORTED_CONTENT_TYPES.contains(&media.as_str())
}

pub fn is_supported_method(method: &Method) -> bool {
    SUPPORTED_METHODS.contains(method)
}
