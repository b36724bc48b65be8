//! Tests for the wrong-method handlers of the shipping endpoints.

use axum::http::StatusCode;
use ongkir::server::controller::shipping::{get_check_costs, post_cities};

use super::*;

/// Expected: 405 with body `Method Not Allowed`
#[tokio::test]
async fn post_cities_is_not_allowed() {
    let resp = post_cities().await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_bytes(resp).await, b"Method Not Allowed");
}

/// Expected: 405 with body `Method Not Allowed`
#[tokio::test]
async fn get_check_costs_is_not_allowed() {
    let resp = get_check_costs().await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_bytes(resp).await, b"Method Not Allowed");
}
