//! Query canonicalization and request signing for the MWS Products client.
//!
//! MWS authenticates query requests with AWS Signature Version 2 using
//! HMAC-SHA256. The signature covers a canonical form of the request:
//!
//! ```text
//! GET\n
//! mws.amazonservices.com\n
//! /Products/2011-10-01\n
//! ASINList.ASIN.1=B000123456&AWSAccessKeyId=...&Action=...&Timestamp=...&Version=2011-10-01
//! ```
//!
//! The query line holds every parameter percent-encoded, as `key=value`
//! fragments sorted in byte order. The base64 digest is appended as the final
//! `Signature` parameter.
//!
//! # Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use mws_auth::{Credentials, ParameterSet, RequestContext, build_unsigned_request, sign_request};
//! use mws_core::{Endpoint, HttpVerb, PRODUCTS_PATH};
//!
//! let credentials = Credentials::new("AKID", "secret", "SELLER");
//! let context = RequestContext::new(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
//!
//! let mut params = ParameterSet::new();
//! params.insert("MarketplaceId", "ATVPDKIKX0DER");
//!
//! let unsigned = build_unsigned_request(
//!     &Endpoint::default(),
//!     HttpVerb::Get,
//!     PRODUCTS_PATH,
//!     &credentials,
//!     "GetCompetitivePricingForASIN",
//!     &context,
//!     params,
//! )
//! .unwrap();
//! let signed = sign_request(unsigned, &credentials).unwrap();
//! assert!(signed.url().starts_with("https://mws.amazonservices.com/Products/2011-10-01?"));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Percent-encoding and canonical query construction
//! - [`credentials`] - Client credentials with a redacted secret
//! - [`error`] - Signing error types
//! - [`params`] - Parameter sets and base parameter population
//! - [`request`] - Unsigned and signed request descriptors
//! - [`signer`] - String-to-sign and HMAC-SHA256 signature computation

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod params;
pub mod request;
pub mod signer;

pub use canonical::{build_canonical_query_string, canonicalize, percent_encode};
pub use credentials::Credentials;
pub use error::AuthError;
pub use params::{ParameterSet, RequestContext, populate_params};
pub use request::{SignedRequest, UnsignedRequest, build_unsigned_request};
pub use signer::{build_string_to_sign, compute_signature, sign_request};
