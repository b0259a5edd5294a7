//! Caller-facing error type for Products operations.

use mws_auth::AuthError;
use mws_core::MwsError;

/// Errors returned by [`MwsClient`](crate::MwsClient) operations.
///
/// A non-2xx HTTP status is not an error at this layer; it is reported through
/// [`MwsResponse::status`](crate::MwsResponse::status).
#[derive(Debug, thiserror::Error)]
pub enum ProductsError {
    /// An argument failed validation. No request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The endpoint host could not be parsed. Nothing was signed.
    #[error("malformed host: {0}")]
    MalformedHost(String),

    /// The signature could not be computed.
    #[error("signing failure: {0}")]
    SigningFailure(String),

    /// The request could not reach the remote host, or the HTTP client could
    /// not be built.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),
}

impl ProductsError {
    /// Whether the error was raised before any network activity.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::MalformedHost(_) | Self::SigningFailure(_)
        )
    }
}

impl From<AuthError> for ProductsError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MalformedHost { .. } => Self::MalformedHost(err.to_string()),
            AuthError::SigningFailure(reason) => Self::SigningFailure(reason),
        }
    }
}

impl From<MwsError> for ProductsError {
    fn from(err: MwsError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

/// Convenience result type for Products operations.
pub type ProductsResult<T> = Result<T, ProductsError>;
