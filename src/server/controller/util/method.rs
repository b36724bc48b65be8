//! `405 Method Not Allowed` responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body of every 405 response
pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";

/// 405 response with a plain text body
pub fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_BODY).into_response()
}

/// Replaces the empty body Axum gives 405 responses with [`METHOD_NOT_ALLOWED_BODY`]
///
/// Covers methods without a dedicated handler, e.g. `DELETE /api/cities`.
pub async fn fill_method_not_allowed(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return method_not_allowed();
    }

    response
}
