use axum::{body::to_bytes, response::Response};

/// Collects a response body for assertions
pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body")
        .to_vec()
}
