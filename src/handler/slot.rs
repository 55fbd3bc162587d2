//! Terminal response slot
//!
//! Holds the single response a request may produce. Once filled, later writes are refused.

use crate::http::HttpResponse;

#[derive(Default)]
pub enum ResponseSlot {
    #[default]
    Pending,
    Sent(HttpResponse),
}

impl ResponseSlot {
    pub const fn new() -> Self {
        Self::Pending
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Store the terminal response
    ///
    /// Returns `false` and drops `response` if one was already sent.
    pub fn send(&mut self, response: HttpResponse) -> bool {
        match self {
            Self::Pending => {
                *self = Self::Sent(response);
                true
            }
            Self::Sent(_) => false,
        }
    }

    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            Self::Pending => None,
            Self::Sent(response) => Some(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{build_404_response, build_500_response};
    use hyper::StatusCode;

    #[test]
    fn test_first_write_wins() {
        let mut slot = ResponseSlot::new();
        assert!(slot.is_pending());

        assert!(slot.send(build_404_response().unwrap()));
        assert!(!slot.is_pending());
        assert!(!slot.send(build_500_response()));

        let response = slot.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_pending_has_no_response() {
        assert!(ResponseSlot::default().into_response().is_none());
    }
}
