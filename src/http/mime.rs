//! MIME type detection module
//!
//! Maps a file extension to one of the content types the server can serve.

/// Get MIME type for a file extension, or `None` when the extension has no mapping
///
/// # Examples
/// ```
/// use exchange::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("txt")), Some("text/plain"));
/// assert_eq!(content_type_for(Some("xml")), Some("image/svg+xml"));
/// assert_eq!(content_type_for(Some("mp4")), None);
/// ```
pub fn content_type_for(extension: Option<&str>) -> Option<&'static str> {
    let extension = extension?.to_ascii_lowercase();
    match extension.as_str() {
        // Text
        "css" => Some("text/css"),
        "html" => Some("text/html"),
        "txt" => Some("text/plain"),

        // Vector images, xml is served as svg
        "svg" | "xml" => Some("image/svg+xml"),

        // Scripts and data
        "json" => Some("application/json"),
        "js" => Some("application/javascript"),

        "png" => Some("image/png"),

        _ => None,
    }
}
