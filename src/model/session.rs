//! The session marker cookie.
//!
//! A user counts as logged in while the browser holds a `userEmail` cookie. The cookie carries
//! the email typed into the login form and nothing else: it is not signed, not encrypted and
//! never checked against a credential store. Only its presence matters to the access gate.
//! The client writes and deletes it, the server only ever looks for it.

use cookie::{time::Duration, Cookie, SameSite};

/// Name of the cookie holding the session marker
pub const SESSION_MARKER_COOKIE: &str = "userEmail";

/// Lifetime of the session marker once written by the login form
pub const SESSION_MARKER_TTL_DAYS: i64 = 7;

/// Delay between a successful login/logout and the follow-up navigation
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Page only reachable while the session marker is present
pub const PROTECTED_PATH: &str = "/guarded";

/// Page only reachable while the session marker is absent
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionMarker {
    email: String,
}

impl SessionMarker {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `document.cookie` assignment that stores the marker for [`SESSION_MARKER_TTL_DAYS`]
    pub fn set_cookie(&self) -> String {
        Cookie::build((SESSION_MARKER_COOKIE, self.email.clone()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(Duration::days(SESSION_MARKER_TTL_DAYS))
            .build()
            .encoded()
            .to_string()
    }

    /// `document.cookie` assignment that deletes the marker
    pub fn removal_cookie() -> String {
        Cookie::build((SESSION_MARKER_COOKIE, ""))
            .path("/")
            .max_age(Duration::ZERO)
            .build()
            .to_string()
    }
}
