//! Errors of the shipping proxy endpoints and the fixed 500 bodies they render.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, CHECK_COSTS_FAILED, FETCH_CITIES_FAILED},
    server::error::provider::ProviderError,
};

/// Failure of one of the shipping proxy endpoints.
///
/// Every variant collapses into a 500 with a fixed message per endpoint; the cause is only
/// written to the server log.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// The city list could not be fetched from RajaOngkir.
    #[error("Failed to fetch cities: {0}")]
    CitiesUnavailable(#[source] ProviderError),
    /// The cost lookup could not be fetched from RajaOngkir.
    #[error("Failed to check costs: {0}")]
    CostsUnavailable(#[source] ProviderError),
    /// The inbound cost query body could not be read.
    #[error("Failed to check costs, invalid cost query body: {0}")]
    InvalidCostRequest(#[source] serde_json::Error),
}

impl ShippingError {
    fn message(&self) -> &'static str {
        match self {
            Self::CitiesUnavailable(_) => FETCH_CITIES_FAILED,
            Self::CostsUnavailable(_) | Self::InvalidCostRequest(_) => CHECK_COSTS_FAILED,
        }
    }
}

impl IntoResponse for ShippingError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
