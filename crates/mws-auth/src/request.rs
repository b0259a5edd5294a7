//! Request descriptors.
//!
//! An [`UnsignedRequest`] carries everything the signer needs: verb, host,
//! path and the canonical query. [`sign_request`](crate::signer::sign_request)
//! turns it into a [`SignedRequest`], whose URL is what actually goes on the
//! wire. Both are built per call and dropped once the response is read.

use std::str::FromStr;

use http::uri::Authority;
use mws_core::{Endpoint, HttpVerb};

use crate::canonical::canonicalize;
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::params::{PARAM_SIGNATURE, ParameterSet, RequestContext, populate_params};

/// A request whose canonical query has been built but not yet signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedRequest {
    /// HTTP verb.
    pub verb: HttpVerb,
    /// URL scheme.
    pub scheme: String,
    /// `host[:port]`, exactly as it appears in the string to sign.
    pub host: String,
    /// Request path.
    pub path: String,
    /// Sorted, percent-encoded query without the signature.
    pub canonical_query: String,
}

/// A request carrying its signature as the final query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP verb.
    pub verb: HttpVerb,
    /// URL scheme.
    pub scheme: String,
    /// `host[:port]`.
    pub host: String,
    /// Request path.
    pub path: String,
    /// Sorted, percent-encoded query the signature was computed over.
    pub canonical_query: String,
    /// Base64 signature, percent-encoded for inclusion in the query.
    pub signature: String,
}

impl SignedRequest {
    /// The canonical query followed by `&Signature=<signature>`.
    #[must_use]
    pub fn query(&self) -> String {
        format!(
            "{}&{PARAM_SIGNATURE}={}",
            self.canonical_query, self.signature
        )
    }

    /// The absolute request URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}://{}{}?{}",
            self.scheme,
            self.host,
            self.path,
            self.query()
        )
    }
}

/// Build the unsigned request for one call.
///
/// The host is checked before any signing work happens and must be a bare
/// `host[:port]` authority.
///
/// # Errors
///
/// Returns [`AuthError::MalformedHost`] if the endpoint host is empty or does
/// not parse as an authority.
pub fn build_unsigned_request(
    endpoint: &Endpoint,
    verb: HttpVerb,
    path: &str,
    credentials: &Credentials,
    action: &str,
    context: &RequestContext,
    params: ParameterSet,
) -> Result<UnsignedRequest, AuthError> {
    validate_host(&endpoint.host)?;

    let values = populate_params(credentials, action, context, params);

    Ok(UnsignedRequest {
        verb,
        scheme: endpoint.scheme.clone(),
        host: endpoint.host.clone(),
        path: path.to_owned(),
        canonical_query: canonicalize(&values),
    })
}

fn validate_host(host: &str) -> Result<(), AuthError> {
    let malformed = |reason: &str| AuthError::MalformedHost {
        host: host.to_owned(),
        reason: reason.to_owned(),
    };

    if host.is_empty() {
        return Err(malformed("host is empty"));
    }
    let authority = Authority::from_str(host).map_err(|e| malformed(&e.to_string()))?;
    if authority.as_str().contains('@') {
        return Err(malformed("user info is not allowed"));
    }

    Ok(())
}
