//! HTTP response building module
//!
//! Provides builders for every status the request handler emits.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ALLOW, CACHE_CONTROL, CONNECTION,
    CONTENT_LENGTH, CONTENT_TYPE, SERVER,
};
use hyper::{Response, StatusCode};

use super::supported::{allowed_content_types, allowed_methods};

pub type HttpResponse = Response<Full<Bytes>>;
pub type BuildResult = Result<HttpResponse, hyper::http::Error>;

pub const NOT_FOUND_MESSAGE: &str = "Resource you trying to reach is not accessible.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const UNSUPPORTED_MEDIA_MESSAGE: &str =
    "Unable to determine content type of requested resource.";
pub const EMPTY_BODY_MESSAGE: &str = "Request body is empty.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "413 Payload Too Large";

/// Build 200 response carrying a served file
pub fn build_file_response(data: Bytes, content_type: &str) -> BuildResult {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, format!("{content_type}; charset=utf-8"))
        .header(CONTENT_LENGTH, data.len())
        .body(Full::new(data))
}

/// Build 201 Created response with an empty body
pub fn build_201_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::CREATED)
        .body(Full::new(Bytes::new()))
}

/// Build OPTIONS capability response
pub fn build_options_response(server_name: &str) -> BuildResult {
    let methods = allowed_methods();
    Response::builder()
        .status(StatusCode::OK)
        .header(ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
        .header(ACCESS_CONTROL_ALLOW_METHODS, methods.as_str())
        .header(ALLOW, methods.as_str())
        .header(SERVER, server_name)
        .body(Full::new(Bytes::from(format!(
            "Status code: 200\nAllow: {methods}"
        ))))
}

/// Build 400 Bad Request response for a POST that carried no body
pub fn build_400_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::BAD_REQUEST)
        .body(Full::new(Bytes::from(EMPTY_BODY_MESSAGE)))
}

/// Build 404 Not Found response
pub fn build_404_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Full::new(Bytes::from(NOT_FOUND_MESSAGE)))
}

/// Build 405 Method Not Allowed response
///
/// `Content-Type` intentionally lists every supported type instead of a single MIME value.
pub fn build_405_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(ALLOW, allowed_methods())
        .header(CONTENT_TYPE, allowed_content_types())
        .header(CACHE_CONTROL, "no-cache")
        .body(Full::new(Bytes::from(METHOD_NOT_ALLOWED_MESSAGE)))
}

/// Build 406 Not Acceptable response naming the rejected content type
pub fn build_406_response(content_type: Option<&str>) -> BuildResult {
    let rejected = content_type.unwrap_or("Missing Content-Type");
    Response::builder()
        .status(StatusCode::NOT_ACCEPTABLE)
        .body(Full::new(Bytes::from(format!(
            "{rejected} is not acceptable. Try one of following: {}.",
            allowed_content_types()
        ))))
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::PAYLOAD_TOO_LARGE)
        .header(CONNECTION, "close")
        .body(Full::new(Bytes::from(PAYLOAD_TOO_LARGE_MESSAGE)))
}

/// Build 415 Unsupported Media Type response
pub fn build_415_response() -> BuildResult {
    Response::builder()
        .status(StatusCode::UNSUPPORTED_MEDIA_TYPE)
        .body(Full::new(Bytes::from(UNSUPPORTED_MEDIA_MESSAGE)))
}

/// Build 500 Internal Server Error response
///
/// Built without the builder so it cannot fail.
pub fn build_500_response() -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::from(INTERNAL_ERROR_MESSAGE)));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: HttpResponse) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_405_headers() {
        let response = build_405_response().unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET, POST, OPTIONS");
        assert_eq!(
            response.headers()[CONTENT_TYPE],
            "text/plain, text/css, text/html, image/svg+xml, application/json, application/javascript, image/png"
        );
        assert_eq!(response.headers()[CACHE_CONTROL], "no-cache");
        assert_eq!(body_string(response).await, "Method not allowed");
    }

    #[tokio::test]
    async fn test_options_headers() {
        let response = build_options_response("exchange").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, OPTIONS"
        );
        assert_eq!(response.headers()[ALLOW], "GET, POST, OPTIONS");
        assert_eq!(response.headers()[SERVER], "exchange");
        assert_eq!(
            body_string(response).await,
            "Status code: 200\nAllow: GET, POST, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_406_body() {
        let response = build_406_response(Some("application/xml")).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        let body = body_string(response).await;
        assert!(body.starts_with("application/xml is not acceptable."));
        assert!(body.contains("text/plain, text/css"));

        let missing = body_string(build_406_response(None).unwrap()).await;
        assert!(missing.starts_with("Missing Content-Type is not acceptable."));
    }

    #[tokio::test]
    async fn test_file_response_headers() {
        let response = build_file_response(Bytes::from("hello"), "text/plain").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(response.headers()[CONTENT_LENGTH], "5");
        assert_eq!(body_string(response).await, "hello");
    }

    #[tokio::test]
    async fn test_413_closes_connection() {
        let response = build_413_response().unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.headers()[CONNECTION], "close");
        assert_eq!(body_string(response).await, "413 Payload Too Large");
    }

    #[tokio::test]
    async fn test_500_response() {
        let response = build_500_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Internal server error");
    }
}
