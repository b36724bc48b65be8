//! Shipping proxy service.

use axum::body::Bytes;
use dioxus_logger::tracing;

use crate::server::{
    error::shipping::ShippingError, model::shipping::CostQuery, provider::ProviderClient,
};

/// Relays the shipping endpoints' requests to RajaOngkir and maps failures to [`ShippingError`]
pub struct ShippingService<'a> {
    provider: &'a ProviderClient,
}

impl<'a> ShippingService<'a> {
    /// Creates a new instance of [`ShippingService`]
    pub fn new(provider: &'a ProviderClient) -> Self {
        Self { provider }
    }

    /// Relays the provider's city list
    pub async fn list_cities(&self) -> Result<Bytes, ShippingError> {
        self.provider
            .list_cities()
            .await
            .map_err(ShippingError::CitiesUnavailable)
    }

    /// Reads a cost query from a raw request body and relays the provider's quote
    ///
    /// The four query fields are forwarded with whatever JSON values they hold. A body that
    /// isn't a JSON object with all four fails the same way a provider failure does.
    pub async fn check_costs(&self, body: &[u8]) -> Result<Bytes, ShippingError> {
        let query = serde_json::from_slice::<CostQuery>(body)
            .map_err(ShippingError::InvalidCostRequest)?;

        tracing::debug!(
            origin = %query.origin,
            destination = %query.destination,
            weight = %query.weight,
            courier = %query.courier,
            "Checking shipping costs"
        );

        self.provider
            .check_cost(&query)
            .await
            .map_err(ShippingError::CostsUnavailable)
    }
}
