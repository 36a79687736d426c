use std::time::Duration;

use relay_types::Command;
use relay_types::OrderRequest;
use serde_json::Value;

use crate::client::HttpClient;
use crate::client::HttpClientConfig;
use crate::errors::HttpError;
use crate::errors::Result;
use crate::gateway::OrderGateway;
use crate::gateway::OrderOutcome;

pub const DHAN_BASE_URL: &str = "https://api.dhan.co";

/// Dhan REST API client for order placement
pub struct DhanClient {
    client: HttpClient,
    base_url: String,
    client_id: String,
    access_token: String,
}

impl DhanClient {
    /// Create a client against the production API with default HTTP settings
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::builder().client_id(client_id).access_token(access_token).build()
    }

    /// Create a new client builder
    pub fn builder() -> DhanClientBuilder {
        DhanClientBuilder::default()
    }

    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> HttpError {
        if err.is_timeout() { HttpError::Timeout(self.timeout_limit(err.is_connect())) } else { HttpError::RequestFailed(err) }
    }

    /// The limit that was hit: connecting has its own, shorter budget
    fn timeout_limit(&self, during_connect: bool) -> Duration {
        let config = self.client.config();
        if during_connect { config.connect_timeout } else { config.request_timeout }
    }
}

impl OrderGateway for DhanClient {
    async fn place_order(&self, command: &Command) -> Result<OrderOutcome> {
        let request = OrderRequest::from_command(command);
        let url = self.orders_url();

        tracing::info!(
            action = %request.transaction_type,
            symbol = %request.trading_symbol,
            quantity = request.quantity,
            "Submitting order"
        );

        let response = self
            .client
            .post(&url)
            .header("access-token", &self.access_token)
            .header("Client-Id", &self.client_id)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_transport_error(err))?;

        // Rejections come back with a 4xx status and a JSON body, so the body
        // is interpreted regardless of the status code
        let status = response.status();
        let bytes = response.bytes().await.map_err(|err| self.map_transport_error(err))?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if !body.is_object() {
            return Err(HttpError::InvalidResponse(format!("HTTP {status}: expected a JSON object, got {body}")));
        }

        let outcome = OrderOutcome::from_body(body);
        if outcome.is_placed() {
            tracing::info!(%status, "Order accepted");
        } else {
            tracing::warn!(%status, body = %outcome.body(), "Order not accepted");
        }

        Ok(outcome)
    }
}

#[derive(Default)]
pub struct DhanClientBuilder {
    base_url: Option<String>,
    client_id: Option<String>,
    access_token: Option<String>,
    http_config: Option<HttpClientConfig>,
}

impl DhanClientBuilder {
    /// Override the API base URL (defaults to the production endpoint)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    pub fn build(self) -> Result<DhanClient> {
        let client = HttpClient::with_config(self.http_config.unwrap_or_default())?;
        let base_url = self.base_url.unwrap_or_else(|| DHAN_BASE_URL.to_string()).trim_end_matches('/').to_string();

        Ok(DhanClient {
            client,
            base_url,
            client_id: self.client_id.unwrap_or_default(),
            access_token: self.access_token.unwrap_or_default(),
        })
    }
}
