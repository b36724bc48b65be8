//! Access gate redirecting between the login and shipping pages based on the session marker.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use dioxus_logger::tracing;

use crate::{model::session::SESSION_MARKER_COOKIE, server::model::gate::GatePaths};

/// Access gate middleware
///
/// Looks only at the request path and whether the `userEmail` cookie is present. A malformed
/// or missing cookie counts as absent. On a redirect the wrapped handler never runs.
///
/// # Responses
/// - 307 (Temporary Redirect): `/guarded` without the cookie goes to `/login`, `/login` with
///   the cookie goes to `/guarded`
/// - Anything else: the response of the wrapped route
pub async fn access_gate(
    State(paths): State<GatePaths>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let marker_present = jar.get(SESSION_MARKER_COOKIE).is_some();
    let decision = paths.decide(request.uri().path(), marker_present);

    let Some(target) = paths.redirect_target(decision) else {
        return next.run(request).await;
    };

    tracing::debug!(
        path = %request.uri().path(),
        ?decision,
        "Access gate redirecting to {}",
        target
    );

    Redirect::temporary(target).into_response()
}
