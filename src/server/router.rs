//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the API routes, generates their OpenAPI documentation with utoipa, and
//! wires the access gate in front of the whole application.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{self, util::method::fill_method_not_allowed},
    middleware::gate::access_gate,
    model::{app::AppState, gate::GatePaths},
};

/// Builds the API router with the shipping proxy endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/cities` - Relay the RajaOngkir city list
/// - `POST /api/check-costs` - Relay a RajaOngkir cost quote
/// - `POST /api/cities`, `GET /api/check-costs` and any other method on those paths - 405
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given its state and merged into the main router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Ongkir", description = "Ongkir API"), tags(
        (name = controller::shipping::SHIPPING_TAG, description = "Shipping cost proxy routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::shipping::get_cities,
            controller::shipping::post_cities
        ))
        .routes(routes!(
            controller::shipping::check_costs,
            controller::shipping::get_check_costs
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::map_response(fill_method_not_allowed))
}

/// Puts the access gate in front of every route of `router`
///
/// The gate only acts on `/guarded` and `/login`, every other path passes through.
pub fn with_access_gate(router: Router) -> Router {
    router.layer(middleware::from_fn_with_state(
        GatePaths::default(),
        access_gate,
    ))
}
