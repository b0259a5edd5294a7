//! Operation inputs.
//!
//! Fields hold raw strings as callers supply them; validation happens when
//! the operation runs, so a bad value surfaces as
//! [`ProductsError::InvalidArgument`](crate::ProductsError::InvalidArgument).

use serde::{Deserialize, Serialize};

/// Input for `GetMatchingProductForId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingProductRequest {
    /// Target marketplace.
    pub marketplace_id: String,
    /// One of `ASIN`, `GCID`, `SellerSKU`, `UPC`, `EAN`, `ISBN`, `JAN`.
    pub id_type: String,
    /// Up to five identifiers of `id_type`.
    pub id_list: Vec<String>,
}

impl MatchingProductRequest {
    /// Create a request.
    pub fn new<I, S>(marketplace_id: impl Into<String>, id_type: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            marketplace_id: marketplace_id.into(),
            id_type: id_type.into(),
            id_list: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input for `GetCompetitivePricingForASIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitivePricingRequest {
    /// Target marketplace.
    pub marketplace_id: String,
    /// Up to twenty ASINs.
    pub asin_list: Vec<String>,
}

impl CompetitivePricingRequest {
    /// Create a request.
    pub fn new<I, S>(marketplace_id: impl Into<String>, asins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            marketplace_id: marketplace_id.into(),
            asin_list: asins.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input for `GetLowestPricedOffersForASIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowestPricedOffersRequest {
    /// Target marketplace.
    pub marketplace_id: String,
    /// The product.
    pub asin: String,
    /// One of `New`, `Used`, `Collectible`, `Refurbished`, `Club`.
    pub item_condition: String,
}

impl LowestPricedOffersRequest {
    /// Create a request.
    pub fn new(
        marketplace_id: impl Into<String>,
        asin: impl Into<String>,
        item_condition: impl Into<String>,
    ) -> Self {
        Self {
            marketplace_id: marketplace_id.into(),
            asin: asin.into(),
            item_condition: item_condition.into(),
        }
    }
}

/// Input for `GetLowestOfferListingsForASIN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowestOfferListingsRequest {
    /// Target marketplace.
    pub marketplace_id: String,
    /// Up to twenty ASINs.
    pub asin_list: Vec<String>,
    /// Optional condition filter. `None` and `Some("")` both omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_condition: Option<String>,
}

impl LowestOfferListingsRequest {
    /// Create a request without a condition filter.
    pub fn new<I, S>(marketplace_id: impl Into<String>, asins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            marketplace_id: marketplace_id.into(),
            asin_list: asins.into_iter().map(Into::into).collect(),
            item_condition: None,
        }
    }

    /// Filter by item condition.
    #[must_use]
    pub fn with_item_condition(mut self, condition: impl Into<String>) -> Self {
        self.item_condition = Some(condition.into());
        self
    }
}
