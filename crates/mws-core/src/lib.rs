//! Core types, marketplace tables, and protocol configuration for the MWS
//! Products client.
//!
//! This crate holds the data every other crate in the workspace shares: the
//! static marketplace-to-endpoint table, the closed sets of product identifier
//! types and item conditions, the fixed protocol constants, and the clock used
//! to timestamp requests.

mod clock;
mod config;
mod error;
mod marketplace;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    API_VERSION, Endpoint, HttpVerb, PRODUCTS_PATH, ProtocolConfig, SCHEME, SIGNATURE_METHOD,
    SIGNATURE_VERSION,
};
pub use error::{MwsError, MwsResult};
pub use marketplace::Marketplace;
pub use types::{IdType, ItemCondition};
