//! Tests for the get_cities endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use ongkir::server::{controller::shipping::get_cities, model::app::AppState};

use super::*;

/// Tests relaying the provider's city list.
///
/// Expected: Ok with 200 OK, JSON content type and the provider body byte for byte
#[tokio::test]
async fn relays_city_list_unchanged() -> Result<(), TestError> {
    let body = fixtures::provider::city_list_body();
    let test = TestBuilder::new().with_city_endpoint(&body, 1).build().await?;

    let result = get_cities(State(test.to_app_state::<AppState>())).await;

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

/// Tests an error status from the provider.
///
/// Expected: Err rendering 500 with exactly `{"error":"Failed to fetch cities"}`
#[tokio::test]
async fn fails_with_fixed_message_on_provider_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_city_endpoint(400, 1)
        .build()
        .await?;

    let result = get_cities(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to fetch cities"}"#
    );

    test.assert_mocks();

    Ok(())
}

/// Tests a provider answering 200 with a body that is not JSON.
///
/// Expected: Err rendering 500 with the fixed message
#[tokio::test]
async fn fails_on_non_json_provider_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_endpoint("<html>maintenance</html>", 1)
        .build()
        .await?;

    let result = get_cities(State(test.to_app_state::<AppState>())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to fetch cities"}"#
    );

    test.assert_mocks();

    Ok(())
}

/// Tests a server started without an API key.
///
/// Expected: Err rendering 500 without the provider ever being called
#[tokio::test]
async fn fails_without_api_key() -> Result<(), TestError> {
    let body = fixtures::provider::city_list_body();
    let test = TestBuilder::new()
        .without_api_key()
        .with_city_endpoint(&body, 0)
        .build()
        .await?;

    let result = get_cities(State(test.to_app_state::<AppState>())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to fetch cities"}"#
    );

    test.assert_mocks();

    Ok(())
}

/// Tests an unreachable provider.
///
/// Expected: Err rendering 500 with the fixed message
#[tokio::test]
async fn fails_when_provider_unreachable() -> Result<(), TestError> {
    let state = AppState::from(("http://127.0.0.1:1".to_string(), Some("key".to_string())));

    let result = get_cities(State(state)).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to fetch cities"}"#
    );

    Ok(())
}

/// Tests a provider answering 200 with an empty body.
///
/// Expected: Err rendering 500 with the fixed message
#[tokio::test]
async fn fails_on_empty_provider_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/city")
                .match_header("key", mockito::Matcher::Any)
                .with_status(200)
                .with_body("")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = get_cities(State(test.to_app_state::<AppState>())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_bytes(resp).await,
        br#"{"error":"Failed to fetch cities"}"#
    );

    test.assert_mocks();

    Ok(())
}
