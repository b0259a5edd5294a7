//! Error types for request signing.

/// Errors that can occur while building or signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The endpoint host is not a valid `host[:port]` authority.
    #[error("malformed host {host:?}: {reason}")]
    MalformedHost {
        /// The rejected host.
        host: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The MAC primitive refused the key or input.
    #[error("failed to compute signature: {0}")]
    SigningFailure(String),
}
