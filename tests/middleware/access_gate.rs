use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use ongkir::server::router::with_access_gate;
use tower::ServiceExt;

use crate::util::body_bytes;

/// Gated router whose handlers record that they ran
fn gated_router(reached: Arc<AtomicBool>) -> Router {
    let page = move |name: &'static str| {
        let reached = reached.clone();
        get(move || async move {
            reached.store(true, Ordering::SeqCst);
            name
        })
    };

    with_access_gate(
        Router::new()
            .route("/", page("home"))
            .route("/guarded", page("guarded"))
            .route("/login", page("login"))
            .route("/guarded/settings", page("settings")),
    )
}

fn request(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// Expect the protected page without a marker to redirect to login, handler untouched
#[tokio::test]
async fn redirects_protected_path_without_marker() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/guarded", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login");
    assert!(!reached.load(Ordering::SeqCst));
}

/// Expect the protected page to render with a marker present
#[tokio::test]
async fn allows_protected_path_with_marker() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/guarded", Some("userEmail=a%40b.com")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
    assert_eq!(body_bytes(resp).await, b"guarded");
}

/// Expect the login page with a marker present to redirect to the protected page
#[tokio::test]
async fn redirects_login_path_with_marker() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/login", Some("userEmail=a%40b.com")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/guarded");
    assert!(!reached.load(Ordering::SeqCst));
}

/// Expect the login page to render without a marker
#[tokio::test]
async fn allows_login_path_without_marker() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/login", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
}

/// Expect other paths to pass through whether or not the marker is present
#[tokio::test]
async fn allows_other_paths_regardless_of_marker() {
    for cookie in [None, Some("userEmail=a%40b.com")] {
        for path in ["/", "/guarded/settings"] {
            let reached = Arc::new(AtomicBool::new(false));

            let resp = gated_router(reached.clone())
                .oneshot(request(path, cookie))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::OK, "{path} {cookie:?}");
            assert!(reached.load(Ordering::SeqCst));
        }
    }
}

/// Expect the query string to be ignored when matching the path
#[tokio::test]
async fn ignores_query_string() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/guarded?tab=costs", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login");
}

/// Expect an empty marker value to still count as a session
#[tokio::test]
async fn empty_marker_counts_as_present() {
    let reached = Arc::new(AtomicBool::new(false));

    let resp = gated_router(reached.clone())
        .oneshot(request("/guarded", Some("userEmail=")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(reached.load(Ordering::SeqCst));
}

/// Expect unrelated or unparseable cookies to count as no marker
#[tokio::test]
async fn malformed_cookie_counts_as_absent() {
    for cookie in ["theme=dark", "userEmail", "=a@b.com"] {
        let reached = Arc::new(AtomicBool::new(false));

        let resp = gated_router(reached.clone())
            .oneshot(request("/guarded", Some(cookie)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{cookie}");
        assert!(!reached.load(Ordering::SeqCst));
    }
}
