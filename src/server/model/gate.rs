//! Access gate routing decision.
//!
//! The gate is a stateless classifier: given the request path and whether the session marker
//! cookie is present it decides to let the request through or to redirect it. Nothing is read
//! from or written to any store, and every request is classified on its own.

use crate::model::session::{LOGIN_PATH, PROTECTED_PATH};

/// Outcome of the access gate for one request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Serve the request as requested
    Allow,
    /// Protected page requested without a session marker
    RedirectToLogin,
    /// Login page requested while a session marker is present
    RedirectToApp,
}

/// The two paths the gate watches, matched exactly against the request path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GatePaths {
    /// Page requiring the session marker
    pub protected: &'static str,
    /// Page only shown without the session marker
    pub login: &'static str,
}

impl Default for GatePaths {
    fn default() -> Self {
        Self {
            protected: PROTECTED_PATH,
            login: LOGIN_PATH,
        }
    }
}

impl GatePaths {
    /// Classifies a request by its path and the presence of the session marker
    ///
    /// Only the exact protected and login paths are ever redirected; any other path,
    /// including sub-paths and trailing-slash variants, is allowed.
    pub fn decide(&self, path: &str, marker_present: bool) -> GateDecision {
        if path == self.protected && !marker_present {
            GateDecision::RedirectToLogin
        } else if path == self.login && marker_present {
            GateDecision::RedirectToApp
        } else {
            GateDecision::Allow
        }
    }

    /// Path a decision redirects to, `None` for [`GateDecision::Allow`]
    pub fn redirect_target(&self, decision: GateDecision) -> Option<&'static str> {
        match decision {
            GateDecision::Allow => None,
            GateDecision::RedirectToLogin => Some(self.login),
            GateDecision::RedirectToApp => Some(self.protected),
        }
    }
}
