//! RajaOngkir HTTP client.

use axum::body::Bytes;
use serde::de::IgnoredAny;

use crate::server::{
    config::provider_api_key, error::provider::ProviderError, model::shipping::CostQuery,
};

/// Provider endpoint listing every supported city
pub const CITY_ENDPOINT: &str = "/city";

/// Provider endpoint quoting the services of a courier between two cities
pub const COST_ENDPOINT: &str = "/cost";

/// Header carrying the API key on every provider request
pub const API_KEY_HEADER: &str = "key";

/// Where the provider API key comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Read `RAJAONGKIR_API_KEY` again on every request
    Environment,
    /// Fixed key, `None` makes every call fail
    Fixed(Option<String>),
}

impl ApiKeySource {
    /// The key to send right now, `None` when no key is configured
    pub fn resolve(&self) -> Option<String> {
        match self {
            Self::Environment => provider_api_key(),
            Self::Fixed(key) => key.clone(),
        }
    }
}

/// Thin RajaOngkir client relaying response bodies verbatim
#[derive(Clone, Debug)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKeySource,
}

impl ProviderClient {
    /// Creates a new [`ProviderClient`]
    ///
    /// # Arguments
    /// - `http` - HTTP client used for every provider call
    /// - `base_url` - Provider base URL without trailing slash
    /// - `api_key` - Source of the API key sent in the `key` header
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: ApiKeySource) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Whether an API key is currently available
    pub fn has_api_key(&self) -> bool {
        self.api_key.resolve().is_some()
    }

    /// Fetches the provider's city list
    ///
    /// # Returns
    /// - `Ok(Bytes)` - Provider JSON body, byte for byte
    /// - `Err(ProviderError)` - Missing key, transport failure, non-success status, or non-JSON body
    pub async fn list_cities(&self) -> Result<Bytes, ProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .http
            .get(self.url(CITY_ENDPOINT))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                endpoint: CITY_ENDPOINT,
                source,
            })?;

        relay_body(CITY_ENDPOINT, response).await
    }

    /// Asks the provider for a cost quote, forwarding the query fields as given
    ///
    /// # Returns
    /// - `Ok(Bytes)` - Provider JSON body, byte for byte
    /// - `Err(ProviderError)` - Missing key, transport failure, non-success status, or non-JSON body
    pub async fn check_cost(&self, query: &CostQuery) -> Result<Bytes, ProviderError> {
        let api_key = self.api_key()?;

        let response = self
            .http
            .post(self.url(COST_ENDPOINT))
            .header(API_KEY_HEADER, api_key)
            .json(query)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                endpoint: COST_ENDPOINT,
                source,
            })?;

        relay_body(COST_ENDPOINT, response).await
    }

    fn api_key(&self) -> Result<String, ProviderError> {
        self.api_key.resolve().ok_or(ProviderError::MissingApiKey)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl From<(String, Option<String>)> for ProviderClient {
    fn from((base_url, api_key): (String, Option<String>)) -> Self {
        Self::new(reqwest::Client::new(), base_url, ApiKeySource::Fixed(api_key))
    }
}

/// Reads a successful provider response, rejecting bodies that are not JSON
async fn relay_body(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<Bytes, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::UnexpectedStatus { endpoint, status });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ProviderError::Request { endpoint, source })?;

    serde_json::from_slice::<IgnoredAny>(&body)
        .map_err(|source| ProviderError::InvalidBody { endpoint, source })?;

    Ok(body)
}
