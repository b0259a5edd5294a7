//! Client construction, signing pipeline and HTTP dispatch.
//!
//! Every call goes through the same pipeline:
//!
//! 1. Capture a timestamp from the client's [`Clock`].
//! 2. Build the canonical query for the action and its parameters.
//! 3. Sign it and append the `Signature` parameter.
//! 4. Issue the request and buffer the whole body.
//!
//! There is no retry, no status classification and no timeout beyond what
//! the underlying `reqwest::Client` applies. Supply a preconfigured client via
//! [`MwsClientBuilder::http_client`] to set one.

use std::sync::Arc;

use mws_auth::{
    Credentials, ParameterSet, RequestContext, SignedRequest, build_unsigned_request,
    sign_request,
};
use mws_core::{Clock, Endpoint, HttpVerb, ProtocolConfig, SystemClock};
use tracing::debug;

use crate::error::{ProductsError, ProductsResult};
use crate::response::MwsResponse;

/// Client for the MWS Products API.
///
/// Cloning is cheap and every method takes `&self`; credentials and
/// configuration are never mutated after construction, so one client can be
/// shared across tasks.
#[derive(Debug, Clone)]
pub struct MwsClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: Endpoint,
    protocol: ProtocolConfig,
    clock: Arc<dyn Clock>,
}

impl MwsClient {
    /// Start building a client for the given credentials.
    #[must_use]
    pub fn builder(credentials: Credentials) -> MwsClientBuilder {
        MwsClientBuilder::new(credentials)
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The credentials requests are signed with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build and sign a request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::MalformedHost`] if the endpoint host does not
    /// parse, or [`ProductsError::SigningFailure`] if signing fails.
    pub fn sign(
        &self,
        action: &str,
        path: &str,
        verb: HttpVerb,
        params: ParameterSet,
    ) -> ProductsResult<SignedRequest> {
        let context =
            RequestContext::new(self.clock.now()).with_protocol(self.protocol.clone());

        let unsigned = build_unsigned_request(
            &self.endpoint,
            verb,
            path,
            &self.credentials,
            action,
            &context,
            params,
        )?;

        Ok(sign_request(unsigned, &self.credentials)?)
    }

    /// Sign and send a request, returning the buffered response.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`MwsClient::sign`], plus
    /// [`ProductsError::Transport`] if the host cannot be reached and
    /// [`ProductsError::Read`] if the body cannot be read.
    pub async fn fetch(
        &self,
        action: &str,
        path: &str,
        verb: HttpVerb,
        params: ParameterSet,
    ) -> ProductsResult<MwsResponse> {
        let signed = self.sign(action, path, verb, params)?;
        self.dispatch(&signed).await
    }

    /// Send an already signed request.
    async fn dispatch(&self, signed: &SignedRequest) -> ProductsResult<MwsResponse> {
        let method = match signed.verb {
            HttpVerb::Get => reqwest::Method::GET,
            HttpVerb::Post => reqwest::Method::POST,
        };

        debug!(
            method = %method,
            host = %signed.host,
            path = %signed.path,
            "Dispatching MWS request"
        );

        let response = self
            .http
            .request(method, signed.url())
            .send()
            .await
            .map_err(ProductsError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ProductsError::Read)?;

        debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Received MWS response"
        );

        Ok(MwsResponse { status, body })
    }
}

/// Builder for [`MwsClient`].
#[derive(Debug)]
pub struct MwsClientBuilder {
    credentials: Credentials,
    endpoint: Endpoint,
    protocol: ProtocolConfig,
    clock: Arc<dyn Clock>,
    http: Option<reqwest::Client>,
}

impl MwsClientBuilder {
    /// Create a builder targeting the default (US) endpoint.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: Endpoint::default(),
            protocol: ProtocolConfig::default(),
            clock: Arc::new(SystemClock),
            http: None,
        }
    }

    /// Send requests to `endpoint`.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Override the fixed protocol parameters.
    #[must_use]
    pub fn protocol(mut self, protocol: ProtocolConfig) -> Self {
        self.protocol = protocol;
        self
    }

    /// Take request timestamps from `clock`.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with a timeout.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ProductsError::Transport`] if no HTTP client was supplied and
    /// the default one cannot be initialized.
    pub fn build(self) -> ProductsResult<MwsClient> {
        let http = match self.http {
            Some(client) => client,
            None => reqwest::Client::builder()
                .build()
                .map_err(ProductsError::Transport)?,
        };

        Ok(MwsClient {
            http,
            credentials: self.credentials,
            endpoint: self.endpoint,
            protocol: self.protocol,
            clock: self.clock,
        })
    }
}
