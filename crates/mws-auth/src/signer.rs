//! Signature Version 2 signing with HMAC-SHA256.
//!
//! ```text
//! StringToSign = HTTP-Verb + "\n" +
//!                Host + "\n" +
//!                Path + "\n" +
//!                CanonicalQuery
//!
//! Signature = URLEncode(Base64(HMAC-SHA256(SecretKey, StringToSign)))
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::canonical::percent_encode;
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::request::{SignedRequest, UnsignedRequest};

type HmacSha256 = Hmac<Sha256>;

/// Build the four-line string to sign.
///
/// # Examples
///
/// ```
/// use mws_auth::build_string_to_sign;
///
/// assert_eq!(
///     build_string_to_sign("GET", "mws.amazonservices.com", "/Products/2011-10-01", "a=1"),
///     "GET\nmws.amazonservices.com\n/Products/2011-10-01\na=1"
/// );
/// ```
#[must_use]
pub fn build_string_to_sign(verb: &str, host: &str, path: &str, canonical_query: &str) -> String {
    format!("{verb}\n{host}\n{path}\n{canonical_query}")
}

/// Compute `Base64(HMAC-SHA256(secret_key, string_to_sign))`.
///
/// The result is not yet URL-safe; it may contain `+`, `/` and `=`.
///
/// # Errors
///
/// Returns [`AuthError::SigningFailure`] if the MAC cannot be keyed.
pub fn compute_signature(secret_key: &str, string_to_sign: &str) -> Result<String, AuthError> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| AuthError::SigningFailure(e.to_string()))?;
    mac.update(string_to_sign.as_bytes());
    let result = mac.finalize().into_bytes();
    Ok(BASE64.encode(result))
}

/// Sign a request with the client's secret key.
///
/// The signature covers the canonical query as built; it is appended after
/// signing and never part of its own input.
///
/// # Errors
///
/// Returns [`AuthError::SigningFailure`] if the MAC cannot be computed.
pub fn sign_request(
    request: UnsignedRequest,
    credentials: &Credentials,
) -> Result<SignedRequest, AuthError> {
    let string_to_sign = build_string_to_sign(
        request.verb.as_str(),
        &request.host,
        &request.path,
        &request.canonical_query,
    );

    debug!(string_to_sign = ?string_to_sign, "Built SigV2 string to sign");

    let signature = compute_signature(credentials.expose_secret(), &string_to_sign)?;

    Ok(SignedRequest {
        verb: request.verb,
        scheme: request.scheme,
        host: request.host,
        path: request.path,
        canonical_query: request.canonical_query,
        signature: percent_encode(&signature),
    })
}
