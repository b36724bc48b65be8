//! Environment configuration.

use reqwest::Url;

use crate::server::error::config::ConfigError;

/// Default base URL of the RajaOngkir starter API
pub const DEFAULT_PROVIDER_URL: &str = "https://api.rajaongkir.com/starter";

/// Environment variable holding the RajaOngkir API key
pub const PROVIDER_API_KEY_VAR: &str = "RAJAONGKIR_API_KEY";

/// Environment variable overriding the RajaOngkir base URL
pub const PROVIDER_URL_VAR: &str = "RAJAONGKIR_URL";

/// Server configuration read from the environment at startup
///
/// The API key is not part of it: [`provider_api_key`] reads it at call time.
#[derive(Clone, Debug)]
pub struct Config {
    /// RajaOngkir base URL without trailing slash
    pub provider_url: String,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var(PROVIDER_URL_VAR).ok())
    }

    fn from_vars(url: Option<String>) -> Result<Self, ConfigError> {
        let provider_url = match url.filter(|url| !url.trim().is_empty()) {
            Some(url) => parse_provider_url(&url)?,
            None => DEFAULT_PROVIDER_URL.to_string(),
        };

        Ok(Self { provider_url })
    }
}

/// Current value of `RAJAONGKIR_API_KEY`, `None` when unset or blank
pub fn provider_api_key() -> Option<String> {
    non_blank(std::env::var(PROVIDER_API_KEY_VAR).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn parse_provider_url(url: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: PROVIDER_URL_VAR.to_string(),
        reason,
    };

    let parsed = Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "expected an http or https URL, got scheme {}",
            parsed.scheme()
        )));
    }

    Ok(url.trim().trim_end_matches('/').to_string())
}
