use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use ongkir::server::{model::app::AppState, router};
use ongkir_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_bytes;

fn api(test: &TestContext) -> Router {
    router::routes().with_state(test.to_app_state::<AppState>())
}

fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

/// Expect the city list to be served through the router
#[tokio::test]
async fn serves_city_list() -> Result<(), TestError> {
    let body = fixtures::provider::city_list_body();
    let test = TestBuilder::new().with_city_endpoint(&body, 1).build().await?;

    let resp = api(&test)
        .oneshot(request(Method::GET, "/api/cities"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, body.as_bytes());

    test.assert_mocks();

    Ok(())
}

/// Expect every unsupported method on the proxy paths to answer 405 with a body
#[tokio::test]
async fn rejects_wrong_methods() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    for (method, path) in [
        (Method::POST, "/api/cities"),
        (Method::DELETE, "/api/cities"),
        (Method::GET, "/api/check-costs"),
        (Method::PUT, "/api/check-costs"),
    ] {
        let resp = api(&test)
            .oneshot(request(method.clone(), path))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_eq!(body_bytes(resp).await, b"Method Not Allowed");
    }

    Ok(())
}

/// Expect the OpenAPI document to list both proxy paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = api(&test)
        .oneshot(request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await)?;
    assert!(doc["paths"]["/api/cities"]["get"].is_object());
    assert!(doc["paths"]["/api/check-costs"]["post"].is_object());

    Ok(())
}
