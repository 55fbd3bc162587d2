//! Static file serving module
//!
//! Resolves `/?filePath=<path>` targets under the files directory, determines the content type
//! and builds the 200 response.

use crate::error::HandlerError;
use crate::http::supported::{media_type, JSON_CONTENT_TYPE, PNG_CONTENT_TYPE, TEXT_CONTENT_TYPES};
use crate::http::{self, mime, HttpResponse};
use crate::logger::Logger;
use hyper::body::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Everything before the first `=` must equal this marker
const FILE_PATH_MARKER: &str = "/?filePath";

/// Extract the requested file path from a request target
///
/// # Examples
/// ```
/// use exchange::handler::static_files::requested_file;
/// assert_eq!(requested_file("/?filePath=readme.txt"), Some("readme.txt"));
/// assert_eq!(requested_file("/files/readme.txt"), None);
/// ```
pub fn requested_file(target: &str) -> Option<&str> {
    let (marker, file_path) = target.split_once('=')?;
    (marker == FILE_PATH_MARKER && !file_path.is_empty()).then_some(file_path)
}

/// Locate a regular file inside `files_dir`
///
/// Paths that escape the directory are treated as missing.
pub async fn locate(files_dir: &Path, file_path: &str, logger: &Logger) -> Option<PathBuf> {
    let files_dir_canonical = match fs::canonicalize(files_dir).await {
        Ok(p) => p,
        Err(e) => {
            logger.log_warning(&format!(
                "Files directory not found or inaccessible '{}': {e}",
                files_dir.display()
            ));
            return None;
        }
    };

    // Missing file is the common 404 case, not worth a warning
    let candidate = fs::canonicalize(files_dir.join(file_path)).await.ok()?;
    if !candidate.starts_with(&files_dir_canonical) {
        logger.log_warning(&format!(
            "Path traversal attempt blocked: {file_path} -> {}",
            candidate.display()
        ));
        return None;
    }

    let metadata = fs::metadata(&candidate).await.ok()?;
    metadata.is_file().then_some(candidate)
}

/// Serve a GET request target
///
/// `requested_type` is the client's Content-Type header; when absent the type comes from the
/// file extension.
pub async fn serve_file(
    target: &str,
    requested_type: Option<&str>,
    files_dir: &Path,
    logger: &Logger,
) -> Result<HttpResponse, HandlerError> {
    let Some(file_path) = requested_file(target) else {
        logger.log(&format!("Target {target} does not name a file"));
        return Ok(http::build_404_response()?);
    };

    let Some(path) = locate(files_dir, file_path, logger).await else {
        logger.log(&format!("Requested file {file_path} does not exist"));
        return Ok(http::build_404_response()?);
    };

    let content_type = match requested_type {
        Some(ct) => Some(media_type(ct)),
        None => mime::content_type_for(path.extension().and_then(|e| e.to_str()))
            .map(ToString::to_string),
    };
    let Some(content_type) = content_type else {
        logger.log_warning(&format!("No content type known for {file_path}"));
        return Ok(http::build_415_response()?);
    };

    let body = match content_type.as_str() {
        ct if TEXT_CONTENT_TYPES.contains(&ct) => {
            let data = fs::read(&path).await?;
            Bytes::from(String::from_utf8_lossy(&data).into_owned())
        }
        PNG_CONTENT_TYPE => Bytes::from(fs::read(&path).await?),
        JSON_CONTENT_TYPE => {
            let data = fs::read(&path).await?;
            let value: serde_json::Value = serde_json::from_slice(&data)?;
            Bytes::from(serde_json::to_string(&value)?)
        }
        other => {
            logger.log_warning(&format!("Cannot serve {file_path} as {other}"));
            return Ok(http::build_415_response()?);
        }
    };

    logger.log(&format!(
        "Serving {file_path} as {content_type} ({} bytes)",
        body.len()
    ));
    Ok(http::build_file_response(body, &content_type)?)
}
