//! HTTP controller endpoints for the Ongkir web API.
//!
//! This module contains the Axum handlers for the two shipping proxy endpoints and the helpers
//! shaping their responses. Handlers are documented with utoipa for the OpenAPI document.

pub mod shipping;
pub mod util;
