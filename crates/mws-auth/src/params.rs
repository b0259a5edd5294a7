//! Parameter sets and base parameter population.
//!
//! A [`ParameterSet`] is an unordered name/value mapping. Its iteration order
//! has no bearing on the request: the canonicalizer sorts the encoded
//! fragments, so two sets holding the same pairs always canonicalize to the
//! same string.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use mws_core::ProtocolConfig;

use crate::credentials::Credentials;

/// `Action` parameter name.
pub const PARAM_ACTION: &str = "Action";
/// `MWSAuthToken` parameter name.
pub const PARAM_AUTH_TOKEN: &str = "MWSAuthToken";
/// `AWSAccessKeyId` parameter name.
pub const PARAM_ACCESS_KEY: &str = "AWSAccessKeyId";
/// `SellerId` parameter name.
pub const PARAM_SELLER_ID: &str = "SellerId";
/// `Version` parameter name.
pub const PARAM_VERSION: &str = "Version";
/// `SignatureMethod` parameter name.
pub const PARAM_SIGNATURE_METHOD: &str = "SignatureMethod";
/// `SignatureVersion` parameter name.
pub const PARAM_SIGNATURE_VERSION: &str = "SignatureVersion";
/// `Timestamp` parameter name.
pub const PARAM_TIMESTAMP: &str = "Timestamp";
/// `Signature` parameter name. Always the last parameter of a signed query.
pub const PARAM_SIGNATURE: &str = "Signature";

/// Request parameters keyed by name. Keys are unique; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    inner: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    /// Insert a list as indexed keys `<list>.<element>.<n>`, with `n` starting at 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mws_auth::ParameterSet;
    ///
    /// let mut params = ParameterSet::new();
    /// params.insert_list("ASINList", "ASIN", &["B01", "B02"]);
    /// assert_eq!(params.get("ASINList.ASIN.1"), Some("B01"));
    /// assert_eq!(params.get("ASINList.ASIN.2"), Some("B02"));
    /// ```
    pub fn insert_list<S: AsRef<str>>(&mut self, list_name: &str, element_name: &str, values: &[S]) {
        for (i, value) in values.iter().enumerate() {
            self.insert(
                format!("{list_name}.{element_name}.{}", i + 1),
                value.as_ref(),
            );
        }
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ParameterSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Everything besides credentials that the base parameters depend on.
///
/// The timestamp is captured by the caller, which keeps parameter population
/// pure and lets tests pin it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Fixed protocol values.
    pub protocol: ProtocolConfig,
    /// Time the request is issued.
    pub timestamp: DateTime<Utc>,
}

impl RequestContext {
    /// Create a context with the default protocol values.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            protocol: ProtocolConfig::default(),
            timestamp,
        }
    }

    /// Replace the protocol values.
    #[must_use]
    pub fn with_protocol(mut self, protocol: ProtocolConfig) -> Self {
        self.protocol = protocol;
        self
    }

    /// The `Timestamp` value: RFC 3339, UTC, whole seconds, `Z` suffix.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Build the full parameter set for one call.
///
/// The base parameters are written first and the caller's `params` are merged
/// over them, so a caller-supplied key replaces a base key of the same name.
#[must_use]
pub fn populate_params(
    credentials: &Credentials,
    action: &str,
    context: &RequestContext,
    params: ParameterSet,
) -> ParameterSet {
    let mut values = ParameterSet::new();

    values.insert(PARAM_ACTION, action);
    if let Some(token) = credentials.auth_token() {
        values.insert(PARAM_AUTH_TOKEN, token);
    }
    values.insert(PARAM_ACCESS_KEY, credentials.access_key_id());
    values.insert(PARAM_SELLER_ID, credentials.seller_id());
    values.insert(PARAM_VERSION, context.protocol.api_version.as_str());
    values.insert(
        PARAM_SIGNATURE_METHOD,
        context.protocol.signature_method.as_str(),
    );
    values.insert(
        PARAM_SIGNATURE_VERSION,
        context.protocol.signature_version.as_str(),
    );
    values.insert(PARAM_TIMESTAMP, context.formatted_timestamp());

    values.extend(params);
    values
}
