//! Browser side effects run through `document::eval`.
//!
//! The session marker is written and removed here, and navigation after login/logout is a
//! full page load rather than a router push so the server's access gate sees the request.

use dioxus::prelude::*;

use crate::model::session::{SessionMarker, REDIRECT_DELAY_MS};

/// Waits `ms` milliseconds using the browser's timer
pub async fn sleep(ms: u32) -> Result<(), String> {
    document::eval(&format!(
        "await new Promise((resolve) => setTimeout(resolve, {ms})); return null;"
    ))
    .await
    .map(|_| ())
    .map_err(|e| format!("Failed to wait {} ms: {}", ms, e))
}

/// Writes the session marker cookie
pub async fn write_session_marker(marker: &SessionMarker) -> Result<(), String> {
    set_document_cookie(&marker.set_cookie()).await
}

/// Deletes the session marker cookie
pub async fn remove_session_marker() -> Result<(), String> {
    set_document_cookie(&SessionMarker::removal_cookie()).await
}

/// Waits [`REDIRECT_DELAY_MS`] then loads `path` as a new page
pub async fn navigate_after_delay(path: &str) -> Result<(), String> {
    sleep(REDIRECT_DELAY_MS).await?;

    let path = js_string(path)?;

    document::eval(&format!("window.location.assign({path}); return null;"))
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to navigate: {}", e))
}

async fn set_document_cookie(cookie: &str) -> Result<(), String> {
    let cookie = js_string(cookie)?;

    document::eval(&format!("document.cookie = {cookie}; return null;"))
        .await
        .map(|_| ())
        .map_err(|e| format!("Failed to update session cookie: {}", e))
}

fn js_string(value: &str) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to encode value: {}", e))
}
