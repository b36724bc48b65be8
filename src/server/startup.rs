//! Startup helpers run once by `dioxus::serve`.

use dioxus_logger::tracing;

use crate::server::{
    config::{provider_api_key, Config, PROVIDER_API_KEY_VAR},
    error::Error,
    provider::{ApiKeySource, ProviderClient},
};

/// User agent sent with every RajaOngkir request
pub static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the RajaOngkir client from the configuration
///
/// The API key is read from the environment on every request. A key missing at startup is
/// not fatal: the proxy endpoints answer 500 until one is configured.
pub fn build_provider_client(config: &Config) -> Result<ProviderClient, Error> {
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    if provider_api_key().is_none() {
        tracing::warn!(
            "{} is not set, every shipping request will fail until it is configured",
            PROVIDER_API_KEY_VAR
        );
    }

    Ok(ProviderClient::new(
        http,
        config.provider_url.clone(),
        ApiKeySource::Environment,
    ))
}
