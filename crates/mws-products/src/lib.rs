//! Signed-query client for the Amazon MWS Products API.
//!
//! Each operation validates its arguments, shapes them into MWS query
//! parameters, signs the request with HmacSHA256 Signature Version 2, and
//! issues a single GET. The response body comes back untouched together with
//! its status code; parsing it is left to the caller.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mws_auth::Credentials;
//! use mws_core::{Endpoint, Marketplace};
//! use mws_products::{CompetitivePricingRequest, MwsClient};
//!
//! # async fn run() -> Result<(), mws_products::ProductsError> {
//! let credentials = Credentials::new("AKID", "secret", "A1SELLER");
//! let client = MwsClient::builder(credentials)
//!     .endpoint(Endpoint::for_marketplace(Marketplace::UnitedStates))
//!     .build()?;
//!
//! let response = client
//!     .get_competitive_pricing_for_asin(&CompetitivePricingRequest::new(
//!         Marketplace::UnitedStates.id(),
//!         ["B000123456"],
//!     ))
//!     .await?;
//! println!("{} {}", response.status, response.body);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Client construction, signing pipeline and HTTP dispatch
//! - [`error`] - Caller-facing error type
//! - [`operations`] - The four Products operations
//! - [`request`] - Operation inputs
//! - [`response`] - Raw response wrapper
//! - [`validate`] - Argument validation

pub mod client;
pub mod error;
pub mod operations;
pub mod request;
pub mod response;
pub mod validate;

pub use client::{MwsClient, MwsClientBuilder};
pub use error::{ProductsError, ProductsResult};
pub use operations::ProductsOperation;
pub use request::{
    CompetitivePricingRequest, LowestOfferListingsRequest, LowestPricedOffersRequest,
    MatchingProductRequest,
};
pub use response::MwsResponse;
