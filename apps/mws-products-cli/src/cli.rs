//! Command-line arguments and client construction.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mws_auth::Credentials;
use mws_core::{Endpoint, Marketplace};
use mws_products::{
    CompetitivePricingRequest, LowestOfferListingsRequest, LowestPricedOffersRequest,
    MatchingProductRequest, MwsClient, MwsResponse,
};
use tracing::info;

/// MWS Products command-line client.
#[derive(Debug, Parser)]
#[command(name = "mws-products")]
#[command(about = "Signed queries against the Amazon MWS Products API")]
#[command(version)]
pub struct Cli {
    /// Connection and credential settings.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log level filter, used when `RUST_LOG` is unset.
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Credentials and endpoint selection.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// AWS access key id.
    #[arg(long, env = "MWS_ACCESS_KEY_ID", global = true)]
    pub access_key_id: Option<String>,

    /// AWS secret key.
    #[arg(long, env = "MWS_SECRET_KEY", hide_env_values = true, global = true)]
    pub secret_key: Option<String>,

    /// Seller (merchant) id.
    #[arg(long, env = "MWS_SELLER_ID", global = true)]
    pub seller_id: Option<String>,

    /// Delegated-access token.
    #[arg(long, env = "MWS_AUTH_TOKEN", hide_env_values = true, global = true)]
    pub auth_token: Option<String>,

    /// Marketplace, as a region code (`US`, `DE`) or marketplace id.
    #[arg(long, env = "MWS_MARKETPLACE", default_value = "US", global = true)]
    pub marketplace: Marketplace,

    /// Override the host derived from the marketplace.
    #[arg(long, env = "MWS_HOST", global = true)]
    pub host: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "MWS_TIMEOUT_SECS", default_value_t = 30, global = true)]
    pub timeout_secs: u64,
}

/// Available operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// GetMatchingProductForId: look up products by identifier.
    MatchingProduct {
        /// Identifier type (`ASIN`, `GCID`, `SellerSKU`, `UPC`, `EAN`, `ISBN`, `JAN`).
        #[arg(long, default_value = "ASIN")]
        id_type: String,
        /// Up to five identifiers, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },
    /// GetCompetitivePricingForASIN: Buy Box prices for up to twenty ASINs.
    CompetitivePricing {
        /// ASINs, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        asins: Vec<String>,
    },
    /// GetLowestPricedOffersForASIN: top offers for one ASIN.
    LowestPricedOffers {
        /// The ASIN.
        #[arg(long)]
        asin: String,
        /// Item condition (`New`, `Used`, `Collectible`, `Refurbished`, `Club`).
        #[arg(long, default_value = "New")]
        condition: String,
    },
    /// GetLowestOfferListingsForASIN: lowest active listings for up to twenty ASINs.
    LowestOfferListings {
        /// ASINs, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        asins: Vec<String>,
        /// Optional item condition filter.
        #[arg(long)]
        condition: Option<String>,
    },
}

impl ConnectionArgs {
    /// The endpoint requests go to.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match &self.host {
            Some(host) => Endpoint::new(host.as_str()),
            None => Endpoint::for_marketplace(self.marketplace),
        }
    }

    /// Assemble credentials, failing on the first missing value.
    pub fn credentials(&self) -> Result<Credentials> {
        let access_key_id = self
            .access_key_id
            .as_deref()
            .context("missing access key id (set MWS_ACCESS_KEY_ID or --access-key-id)")?;
        let secret_key = self
            .secret_key
            .as_deref()
            .context("missing secret key (set MWS_SECRET_KEY or --secret-key)")?;
        let seller_id = self
            .seller_id
            .as_deref()
            .context("missing seller id (set MWS_SELLER_ID or --seller-id)")?;

        let credentials = Credentials::new(access_key_id, secret_key, seller_id);
        Ok(match &self.auth_token {
            Some(token) => credentials.with_auth_token(token.as_str()),
            None => credentials,
        })
    }

    /// Build the client.
    pub fn client(&self) -> Result<MwsClient> {
        let credentials = self.credentials()?;
        let endpoint = self.endpoint();

        info!(
            access_key_id = %credentials.access_key_id(),
            marketplace = %self.marketplace,
            host = %endpoint.host,
            "configured MWS client"
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("failed to initialize HTTP client")?;

        MwsClient::builder(credentials)
            .endpoint(endpoint)
            .http_client(http)
            .build()
            .context("failed to build MWS client")
    }
}

impl Command {
    /// Run the operation against `client` in `marketplace`.
    pub async fn execute(
        self,
        client: &MwsClient,
        marketplace: Marketplace,
    ) -> Result<MwsResponse> {
        let marketplace_id = marketplace.id();
        let response = match self {
            Self::MatchingProduct { id_type, ids } => {
                client
                    .get_matching_product_for_id(&MatchingProductRequest::new(
                        marketplace_id,
                        id_type,
                        ids,
                    ))
                    .await
            }
            Self::CompetitivePricing { asins } => {
                client
                    .get_competitive_pricing_for_asin(&CompetitivePricingRequest::new(
                        marketplace_id,
                        asins,
                    ))
                    .await
            }
            Self::LowestPricedOffers { asin, condition } => {
                client
                    .get_lowest_priced_offers_for_asin(&LowestPricedOffersRequest::new(
                        marketplace_id,
                        asin,
                        condition,
                    ))
                    .await
            }
            Self::LowestOfferListings { asins, condition } => {
                let mut request = LowestOfferListingsRequest::new(marketplace_id, asins);
                if let Some(condition) = condition {
                    request = request.with_item_condition(condition);
                }
                client.get_lowest_offer_listings_for_asin(&request).await
            }
        };

        response.context("MWS request failed")
    }
}
