//! Protocol constants and configuration objects.
//!
//! Everything the canonicalizer used to pull from implicit defaults is carried
//! by [`ProtocolConfig`] instead, so query construction stays a pure function of
//! its inputs.

use std::fmt;

use crate::marketplace::Marketplace;

/// Products API version sent as the `Version` parameter.
pub const API_VERSION: &str = "2011-10-01";

/// Signature method sent as the `SignatureMethod` parameter.
pub const SIGNATURE_METHOD: &str = "HmacSHA256";

/// Signature version sent as the `SignatureVersion` parameter.
pub const SIGNATURE_VERSION: &str = "2";

/// Request path of the Products API.
pub const PRODUCTS_PATH: &str = "/Products/2011-10-01";

/// Scheme used for every MWS request.
pub const SCHEME: &str = "https";

/// HTTP verbs understood by the signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpVerb {
    /// `GET`, used by all Products operations.
    #[default]
    Get,
    /// `POST`.
    Post,
}

impl HttpVerb {
    /// Returns the verb as it appears on the first line of the string to sign.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed protocol parameters merged into every request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolConfig {
    /// Value of the `Version` parameter.
    pub api_version: String,
    /// Value of the `SignatureMethod` parameter.
    pub signature_method: String,
    /// Value of the `SignatureVersion` parameter.
    pub signature_version: String,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            signature_method: SIGNATURE_METHOD.to_owned(),
            signature_version: SIGNATURE_VERSION.to_owned(),
        }
    }
}

/// Where requests are sent: scheme plus `host[:port]`.
///
/// The scheme is always `https` against the real service. Overriding it is
/// meant for local proxies and test listeners.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    /// URL scheme, without `://`.
    pub scheme: String,
    /// Host name, optionally with a port.
    pub host: String,
}

impl Endpoint {
    /// Create an `https` endpoint for the given host.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            scheme: SCHEME.to_owned(),
            host: host.into(),
        }
    }

    /// Create the `https` endpoint serving the given marketplace.
    #[must_use]
    pub fn for_marketplace(marketplace: Marketplace) -> Self {
        Self::new(marketplace.endpoint())
    }

    /// Replace the scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::for_marketplace(Marketplace::default())
    }
}
