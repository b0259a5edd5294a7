//! The four Products operations.
//!
//! Each operation validates its input, shapes it into MWS query parameters,
//! and hands it to [`MwsClient::fetch`]. Parameter shaping is exposed through
//! the `*_params` functions so it can be inspected without a network call.

use std::fmt;

use mws_auth::ParameterSet;
use mws_core::{HttpVerb, PRODUCTS_PATH};

use crate::client::MwsClient;
use crate::error::ProductsResult;
use crate::request::{
    CompetitivePricingRequest, LowestOfferListingsRequest, LowestPricedOffersRequest,
    MatchingProductRequest,
};
use crate::response::MwsResponse;
use crate::validate::{
    MAX_ASIN_LIST_LEN, MAX_ID_LIST_LEN, validate_id_type, validate_item_condition,
    validate_list_len,
};

const PARAM_MARKETPLACE_ID: &str = "MarketplaceId";
const PARAM_ID_TYPE: &str = "IdType";
const PARAM_ASIN: &str = "ASIN";
const PARAM_ITEM_CONDITION: &str = "ItemCondition";

/// All supported Products operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductsOperation {
    /// Look up products by identifier.
    GetMatchingProductForId,
    /// Current competitive pricing for ASINs.
    GetCompetitivePricingForAsin,
    /// Top offers for one ASIN and condition.
    GetLowestPricedOffersForAsin,
    /// Lowest-price active offer listings for ASINs.
    GetLowestOfferListingsForAsin,
}

impl ProductsOperation {
    /// Returns the `Action` parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetMatchingProductForId => "GetMatchingProductForId",
            Self::GetCompetitivePricingForAsin => "GetCompetitivePricingForASIN",
            Self::GetLowestPricedOffersForAsin => "GetLowestPricedOffersForASIN",
            Self::GetLowestOfferListingsForAsin => "GetLowestOfferListingsForASIN",
        }
    }

    /// Parse an `Action` value into a `ProductsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "GetMatchingProductForId" => Some(Self::GetMatchingProductForId),
            "GetCompetitivePricingForASIN" => Some(Self::GetCompetitivePricingForAsin),
            "GetLowestPricedOffersForASIN" => Some(Self::GetLowestPricedOffersForAsin),
            "GetLowestOfferListingsForASIN" => Some(Self::GetLowestOfferListingsForAsin),
            _ => None,
        }
    }
}

impl fmt::Display for ProductsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate and shape a `GetMatchingProductForId` request.
pub fn matching_product_params(request: &MatchingProductRequest) -> ProductsResult<ParameterSet> {
    let id_type = validate_id_type(&request.id_type)?;
    validate_list_len(&request.id_list, MAX_ID_LIST_LEN)?;

    let mut params = ParameterSet::new();
    params.insert_list("IdList", "Id", &request.id_list);
    params.insert(PARAM_ID_TYPE, id_type.as_str());
    params.insert(PARAM_MARKETPLACE_ID, request.marketplace_id.as_str());
    Ok(params)
}

/// Validate and shape a `GetCompetitivePricingForASIN` request.
pub fn competitive_pricing_params(
    request: &CompetitivePricingRequest,
) -> ProductsResult<ParameterSet> {
    validate_list_len(&request.asin_list, MAX_ASIN_LIST_LEN)?;

    let mut params = ParameterSet::new();
    params.insert_list("ASINList", "ASIN", &request.asin_list);
    params.insert(PARAM_MARKETPLACE_ID, request.marketplace_id.as_str());
    Ok(params)
}

/// Validate and shape a `GetLowestPricedOffersForASIN` request.
pub fn lowest_priced_offers_params(
    request: &LowestPricedOffersRequest,
) -> ProductsResult<ParameterSet> {
    let condition = validate_item_condition(&request.item_condition)?;

    let mut params = ParameterSet::new();
    params.insert(PARAM_ASIN, request.asin.as_str());
    params.insert(PARAM_ITEM_CONDITION, condition.as_str());
    params.insert(PARAM_MARKETPLACE_ID, request.marketplace_id.as_str());
    Ok(params)
}

/// Validate and shape a `GetLowestOfferListingsForASIN` request.
///
/// An absent or empty item condition skips validation and is left out of the
/// query.
pub fn lowest_offer_listings_params(
    request: &LowestOfferListingsRequest,
) -> ProductsResult<ParameterSet> {
    validate_list_len(&request.asin_list, MAX_ASIN_LIST_LEN)?;

    let mut params = ParameterSet::new();

    if let Some(condition) = request.item_condition.as_deref().filter(|c| !c.is_empty()) {
        let condition = validate_item_condition(condition)?;
        params.insert(PARAM_ITEM_CONDITION, condition.as_str());
    }

    params.insert_list("ASINList", "ASIN", &request.asin_list);
    params.insert(PARAM_MARKETPLACE_ID, request.marketplace_id.as_str());
    Ok(params)
}

impl MwsClient {
    /// Products and their attributes for up to five identifiers.
    ///
    /// Throttling: quota of 20 requests, restoring one every five seconds,
    /// 720 per hour.
    pub async fn get_matching_product_for_id(
        &self,
        request: &MatchingProductRequest,
    ) -> ProductsResult<MwsResponse> {
        let params = matching_product_params(request)?;
        self.call(ProductsOperation::GetMatchingProductForId, params)
            .await
    }

    /// Current competitive pricing (New and Used Buy Box prices) for up to
    /// twenty ASINs.
    ///
    /// Throttling: quota of 20 requests, restoring 10 items per second,
    /// 36000 per hour.
    pub async fn get_competitive_pricing_for_asin(
        &self,
        request: &CompetitivePricingRequest,
    ) -> ProductsResult<MwsResponse> {
        let params = competitive_pricing_params(request)?;
        self.call(ProductsOperation::GetCompetitivePricingForAsin, params)
            .await
    }

    /// Top 20 offers by landed price for one ASIN and item condition.
    ///
    /// Throttling: quota of 10 requests, restoring five items per second,
    /// 200 per hour.
    pub async fn get_lowest_priced_offers_for_asin(
        &self,
        request: &LowestPricedOffersRequest,
    ) -> ProductsResult<MwsResponse> {
        let params = lowest_priced_offers_params(request)?;
        self.call(ProductsOperation::GetLowestPricedOffersForAsin, params)
            .await
    }

    /// Lowest-price active offer listings for up to twenty ASINs.
    ///
    /// Throttling: quota of 20 requests, restoring 10 items per second,
    /// 36000 per hour.
    pub async fn get_lowest_offer_listings_for_asin(
        &self,
        request: &LowestOfferListingsRequest,
    ) -> ProductsResult<MwsResponse> {
        let params = lowest_offer_listings_params(request)?;
        self.call(ProductsOperation::GetLowestOfferListingsForAsin, params)
            .await
    }

    async fn call(
        &self,
        operation: ProductsOperation,
        params: ParameterSet,
    ) -> ProductsResult<MwsResponse> {
        self.fetch(operation.as_str(), PRODUCTS_PATH, HttpVerb::Get, params)
            .await
    }
}
