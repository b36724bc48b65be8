//! Tests for the check_costs endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use ongkir::{
    model::shipping::CostRequestDto,
    server::{controller::shipping::check_costs, model::app::AppState},
};

use super::*;

fn query() -> CostRequestDto {
    CostRequestDto {
        origin: "501".to_string(),
        destination: "114".to_string(),
        weight: 1700,
        courier: "jne".to_string(),
    }
}

fn request_body(query: &CostRequestDto) -> Result<Bytes, TestError> {
    Ok(Bytes::from(serde_json::to_vec(query)?))
}

/// Tests forwarding the four query fields and relaying the quote.
///
/// Expected: Ok with 200 OK and the provider body byte for byte; the mock only matches when
/// the forwarded JSON equals the inbound query
#[tokio::test]
async fn relays_cost_quote_unchanged() -> Result<(), TestError> {
    let body = fixtures::provider::cost_body();
    let test = TestBuilder::new()
        .with_cost_endpoint(serde_json::to_value(query())?, &body, 1)
        .build()
        .await?;

    let result = check_costs(
        State(test.to_app_state::<AppState>()),
        request_body(&query())?,
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_bytes(resp).await, body.as_bytes());

    test.assert_mocks();

    Ok(())
}

/// Tests a query whose values don't match the browser form's types.
///
/// Expected: Ok with 200 OK; numeric city IDs and a string weight reach the provider exactly
/// as posted
#[tokio::test]
async fn forwards_field_values_as_received() -> Result<(), TestError> {
    let sent = serde_json::json!({
        "origin": 501,
        "destination": 114,
        "weight": "1700",
        "courier": "jne"
    });
    let body = fixtures::provider::cost_body();
    let test = TestBuilder::new()
        .with_cost_endpoint(sent.clone(), &body, 1)
        .build()
        .await?;

    let result = check_costs(
        State(test.to_app_state::<AppState>()),
        Bytes::from(serde_json::to_vec(&sent)?),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, body.as_bytes());

    test.assert_mocks();

    Ok(())
}

/// Tests an error status from the provider.
///
/// Expected: Err rendering 500 with exactly `{"error":"Failed to check costs"}`
#[tokio::test]
async fn fails_with_fixed_message_on_provider_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_cost_endpoint(500, 1)
        .build()
        .await?;

    let result = check_costs(
        State(test.to_app_state::<AppState>()),
        request_body(&query())?,
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to check costs"}"#
    );

    test.assert_mocks();

    Ok(())
}

/// Tests an inbound body missing the query fields.
///
/// Expected: Err rendering 500 with the fixed message, provider never called
#[tokio::test]
async fn fails_on_incomplete_request_body() -> Result<(), TestError> {
    let body = fixtures::provider::cost_body();
    let test = TestBuilder::new()
        .with_cost_endpoint(serde_json::to_value(query())?, &body, 0)
        .build()
        .await?;

    let result = check_costs(
        State(test.to_app_state::<AppState>()),
        Bytes::from_static(br#"{"origin":"501"}"#),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to check costs"}"#
    );

    test.assert_mocks();

    Ok(())
}

/// Tests a server started without an API key.
///
/// Expected: Err rendering 500 without the provider ever being called
#[tokio::test]
async fn fails_without_api_key() -> Result<(), TestError> {
    let body = fixtures::provider::cost_body();
    let test = TestBuilder::new()
        .without_api_key()
        .with_cost_endpoint(serde_json::to_value(query())?, &body, 0)
        .build()
        .await?;

    let result = check_costs(
        State(test.to_app_state::<AppState>()),
        request_body(&query())?,
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to check costs"}"#
    );

    test.assert_mocks();

    Ok(())
}
