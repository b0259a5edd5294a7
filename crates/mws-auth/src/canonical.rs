//! Canonical query construction for Signature Version 2.
//!
//! The canonical query is built in three passes over the parameter set:
//!
//! 1. Percent-encode every name and value and join them as `name=value`
//!    fragments separated by `&`.
//! 2. Escape any `,` and `:` that survived encoding as `%2C` and `%3A`.
//! 3. Split on `&`, sort the fragments as plain byte strings, and rejoin.
//!
//! The sort in the last pass is the only ordering authority. Whatever order
//! the fragments were produced in, the result is the same.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::params::ParameterSet;

/// Characters that are percent-encoded in query names and values.
///
/// Only the RFC 3986 unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`)
/// pass through; everything else, including space, becomes `%XX`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query name or value.
///
/// # Examples
///
/// ```
/// use mws_auth::canonical::percent_encode;
///
/// assert_eq!(percent_encode("2020-01-02T03:04:05Z"), "2020-01-02T03%3A04%3A05Z");
/// assert_eq!(percent_encode("a b+c/d="), "a%20b%2Bc%2Fd%3D");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Encode the set as `name=value` fragments joined by `&`, in iteration order.
#[must_use]
pub fn encode_query(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Escape literal `,` and `:` that must not appear unescaped in the string to
/// sign.
#[must_use]
pub fn escape_reserved(query: &str) -> String {
    query.replace(',', "%2C").replace(':', "%3A")
}

/// Sort the `&`-separated fragments of an encoded query.
///
/// Fragments are compared as whole `name=value` strings in byte order, so
/// `ASINList.ASIN.1=...` sorts before `AWSAccessKeyId=...`, which sorts before
/// `Action=...`. Empty fragments are dropped.
///
/// # Examples
///
/// ```
/// use mws_auth::canonical::build_canonical_query_string;
///
/// assert_eq!(build_canonical_query_string(""), "");
/// assert_eq!(build_canonical_query_string("b=2&a=1"), "a=1&b=2");
/// ```
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    let mut fragments: Vec<&str> = query.split('&').filter(|s| !s.is_empty()).collect();
    fragments.sort_unstable();
    fragments.join("&")
}

/// Produce the canonical query for a parameter set.
#[must_use]
pub fn canonicalize(params: &ParameterSet) -> String {
    build_canonical_query_string(&escape_reserved(&encode_query(params)))
}
