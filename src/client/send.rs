//! Sending the request and handling the reply

use super::request::OutgoingRequest;
use crate::error::ClientError;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, StatusCode, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::path::{Path, PathBuf};

/// Directory received bodies are saved to
pub const SAVE_DIR: &str = "./saved";

#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl Reply {
    /// Summary line printed after every request
    pub fn summary(&self) -> String {
        format!(
            "Request is finished with status code {}.\nMessage: {}",
            self.status.as_u16(),
            self.status.canonical_reason().unwrap_or_default()
        )
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Send the request over plain HTTP and collect the whole reply
pub async fn send(request: &OutgoingRequest) -> Result<Reply, ClientError> {
    let uri: Uri = request.url.parse()?;
    let mut builder = Request::builder()
        .method(request.method.as_str())
        .uri(uri);
    for (name, value) in &request.headers {
        let (name, value) = header_pair(name, value)?;
        builder = builder.header(name, value);
    }
    let body = request.body.clone().map_or_else(Bytes::new, Bytes::from);
    let req = builder.body(Full::new(body))?;

    let client = Client::builder(TokioExecutor::new()).build_http();
    let response = client.request(req).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes();

    Ok(Reply { status, body })
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ClientError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(name.to_string()))?;
    Ok((header_name, header_value))
}

/// Write a received body to `dir/<file name>`, creating `dir` if needed
///
/// Only the final component of `filename` is used.
pub fn save(body: &[u8], dir: &Path, filename: &str) -> std::io::Result<PathBuf> {
    let name = Path::new(filename).file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("'{filename}' is not a file name"),
        )
    })?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    std::fs::write(&path, body)?;
    Ok(path)
}
