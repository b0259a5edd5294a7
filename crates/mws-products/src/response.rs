//! Raw response wrapper.

use http::StatusCode;

/// A fully buffered MWS response.
///
/// The body is returned as sent, whatever the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MwsResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body decoded as text.
    pub body: String,
}

impl MwsResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Discard the status and keep the body.
    #[must_use]
    pub fn into_body(self) -> String {
        self.body
    }
}
