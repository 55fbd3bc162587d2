//! Client request assembly
//!
//! Builds the one request the client sends from a template, a resource file, a plain body,
//! or no body at all, then checks it is worth sending.

use super::template::RequestTemplate;
use crate::cli::ClientArgs;
use crate::error::ClientError;
use std::path::Path;

pub const NOT_ENOUGH_DATA: &str = "Not enough data to perform request. Url or method is undefined.";
pub const EMPTY_POST: &str = "Trying to post empty information on server. Denying request.";
pub const UNKNOWN_METHOD: &str = "Given method is not supported by HTTP protocol.";

/// Methods defined by HTTP; anything else is sent with a warning
pub const HTTP_METHODS: [&str; 8] = [
    "CONNECT", "DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT", "TRACE",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    pub method: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Assembled {
    Ready(OutgoingRequest),
    /// Nothing is sent; the message explains why
    Refused(&'static str),
}

/// Headers given on the command line
pub fn header_flags(args: &ClientArgs) -> Vec<(String, String)> {
    [
        ("Content-Type", &args.contenttype),
        ("Content-Length", &args.contentlength),
        ("Authorization", &args.authorization),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.as_ref().map(|v| (name.to_string(), v.clone())))
    .collect()
}

/// Assemble the request from the arguments
///
/// Source precedence: template, resource file, plain body, no body.
pub fn assemble(args: &ClientArgs) -> Result<Assembled, ClientError> {
    if let Some(path) = &args.template {
        let template = RequestTemplate::load(Path::new(path))?;
        let body = template.body_text();
        let headers = template.headers.into_iter().collect();
        return Ok(validate(template.url, template.method, body, headers));
    }

    let body = match (&args.resource, &args.plainbody) {
        (Some(path), _) => Some(std::fs::read_to_string(path)?),
        (None, Some(text)) => Some(text.clone()),
        (None, None) => None,
    };

    Ok(validate(
        args.url.clone(),
        args.method.clone(),
        body,
        header_flags(args),
    ))
}

pub fn validate(
    url: Option<String>,
    method: Option<String>,
    body: Option<String>,
    headers: Vec<(String, String)>,
) -> Assembled {
    let (Some(url), Some(method)) = (url, method) else {
        return Assembled::Refused(NOT_ENOUGH_DATA);
    };
    if url.is_empty() || method.is_empty() {
        return Assembled::Refused(NOT_ENOUGH_DATA);
    }

    let body = body.filter(|b| !b.is_empty());
    if method == "POST" && body.is_none() {
        return Assembled::Refused(EMPTY_POST);
    }

    Assembled::Ready(OutgoingRequest {
        url,
        method,
        body,
        headers,
    })
}

pub fn is_http_method(method: &str) -> bool {
    HTTP_METHODS.contains(&method)
}
