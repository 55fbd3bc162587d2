//! Content-type admission check
//!
//! Runs before dispatch for GET and POST. POST must carry a supported Content-Type;
//! GET only logs a mismatch.

use crate::http::supported::is_supported_content_type;
use crate::logger::Logger;
use hyper::Method;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    /// Answer with 406 Not Acceptable
    Rejected,
}

pub fn check(method: &Method, content_type: Option<&str>, logger: &Logger) -> Admission {
    let is_get = *method == Method::GET;
    if !is_get && *method != Method::POST {
        return Admission::Accepted;
    }

    logger.log("Checking whether content-type header in request is correct...");
    match content_type {
        Some(ct) if is_supported_content_type(ct) => {
            logger.log(&format!(
                "Content type {ct} is supported. Continue to process request."
            ));
            Admission::Accepted
        }
        None if is_get => Admission::Accepted,
        Some(ct) if is_get => {
            logger.log(&format!(
                "Content type {ct} is not supported, ignored for GET request."
            ));
            Admission::Accepted
        }
        Some(ct) => {
            logger.log_warning(&format!("Rejecting {method} request with content type {ct}"));
            Admission::Rejected
        }
        None => {
            logger.log_warning(&format!("Rejecting {method} request without content type"));
            Admission::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(method: Method, content_type: Option<&str>) -> Admission {
        check(&method, content_type, &Logger::silent())
    }

    #[test]
    fn test_get_is_never_rejected() {
        assert_eq!(run(Method::GET, None), Admission::Accepted);
        assert_eq!(run(Method::GET, Some("text/plain")), Admission::Accepted);
        assert_eq!(run(Method::GET, Some("video/mp4")), Admission::Accepted);
    }

    #[test]
    fn test_post_requires_supported_type() {
        assert_eq!(run(Method::POST, Some("application/json")), Admission::Accepted);
        assert_eq!(run(Method::POST, Some("TEXT/HTML")), Admission::Accepted);
        assert_eq!(
            run(Method::POST, Some("text/plain; charset=utf-8")),
            Admission::Accepted
        );
        assert_eq!(run(Method::POST, Some("application/xml")), Admission::Rejected);
        assert_eq!(run(Method::POST, None), Admission::Rejected);
    }

    #[test]
    fn test_other_methods_skip_check() {
        assert_eq!(run(Method::OPTIONS, None), Admission::Accepted);
        assert_eq!(run(Method::DELETE, Some("video/mp4")), Admission::Accepted);
        assert_eq!(run(Method::PUT, None), Admission::Accepted);
    }
}
