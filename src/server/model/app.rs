//! Application state handed to every API handler.

use crate::server::provider::ProviderClient;

/// State shared by every API handler
#[derive(Clone)]
pub struct AppState {
    /// Client for the RajaOngkir API
    pub provider: ProviderClient,
}

/// Builds the state from a provider base URL and optional API key
impl From<(String, Option<String>)> for AppState {
    fn from(settings: (String, Option<String>)) -> Self {
        Self {
            provider: ProviderClient::from(settings),
        }
    }
}
