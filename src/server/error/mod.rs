//! Error types for the Ongkir server application.
//!
//! Errors are grouped by domain (configuration, the RajaOngkir provider, the shipping proxy
//! endpoints) and use `thiserror` for their `Display` and `Error` implementations. Only the
//! errors handlers return implement `IntoResponse`: configuration errors stop the process at
//! startup and provider errors always reach a handler wrapped in a `ShippingError`.

pub mod config;
pub mod provider;
pub mod shipping;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::shipping::ShippingError};

/// Main error type for the Ongkir server application.
///
/// Aggregates the domain-specific error types and external library errors into a single type,
/// with `#[from]` conversions so `?` works across layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure of one of the shipping proxy endpoints.
    #[error(transparent)]
    ShippingError(#[from] ShippingError),
    /// HTTP client error outside of a provider call (e.g. building the client).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// Shipping errors render their own fixed messages. A bare `reqwest::Error` only comes from
/// building the HTTP client, which happens at startup, and falls back to the generic 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ShippingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
