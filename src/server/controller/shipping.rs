//! Shipping proxy endpoints: `GET /api/cities` and `POST /api/check-costs`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    model::{api::ErrorDto, shipping::CostRequestDto},
    server::{
        controller::util::method::method_not_allowed, error::Error, model::app::AppState,
        service::shipping::ShippingService,
    },
};

/// OpenAPI tag grouping the shipping endpoints
pub static SHIPPING_TAG: &str = "shipping";

/// List every city known to RajaOngkir
///
/// Relays the provider's city list without touching it.
///
/// # Responses
/// - 200 (Success): The provider's JSON body, byte for byte
/// - 500 (Internal Server Error): `{"error":"Failed to fetch cities"}` for any failure
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = SHIPPING_TAG,
    responses(
        (status = 200, description = "City list relayed from RajaOngkir", content_type = "application/json"),
        (status = 500, description = "City list could not be fetched", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let body = ShippingService::new(&state.provider).list_cities().await?;

    Ok(json_body(body))
}

/// Check the cost of a shipment with a courier
///
/// Forwards `origin`, `destination`, `weight` and `courier` to RajaOngkir and relays its answer.
///
/// # Responses
/// - 200 (Success): The provider's JSON body, byte for byte
/// - 500 (Internal Server Error): `{"error":"Failed to check costs"}` for any failure, including
///   a request body that doesn't hold the four fields
#[utoipa::path(
    post,
    path = "/api/check-costs",
    tag = SHIPPING_TAG,
    request_body = CostRequestDto,
    responses(
        (status = 200, description = "Cost quote relayed from RajaOngkir", content_type = "application/json"),
        (status = 500, description = "Costs could not be checked", body = ErrorDto)
    ),
)]
pub async fn check_costs(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let body = ShippingService::new(&state.provider)
        .check_costs(&body)
        .await?;

    Ok(json_body(body))
}

/// The city list only supports GET
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = SHIPPING_TAG,
    responses(
        (status = 405, description = "Method Not Allowed", body = String, content_type = "text/plain")
    ),
)]
pub async fn post_cities() -> Response {
    method_not_allowed()
}

/// The cost lookup only supports POST
#[utoipa::path(
    get,
    path = "/api/check-costs",
    tag = SHIPPING_TAG,
    responses(
        (status = 405, description = "Method Not Allowed", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_check_costs() -> Response {
    method_not_allowed()
}

fn json_body(body: Bytes) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
