//! Navigation-time route guard.
//!
//! Runs before any page body renders and again on every navigation. The
//! decision is a pure, synchronous function of the requested path and the
//! presence of the session cookie; [`evaluate`] reads only the cookie surface
//! so the guard works without touching durable storage.

use crate::token_store;

/// The public landing path unauthenticated users are sent to.
pub const LANDING_PATH: &str = "/";
/// The dashboard path authenticated users are sent to from the landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Paths that render without a session.
const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

/// Path prefixes that require a session.
const PROTECTED_PREFIXES: [&str; 1] = [DASHBOARD_PATH];

/// Infrastructure prefixes the guard never inspects: the API proxy, built
/// assets, and static files.
const BYPASS_PREFIXES: [&str; 3] = ["/api", "/assets", "/static"];

/// Image extensions served directly, bypassing the guard.
const BYPASS_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// Outcome of guarding one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Infrastructure path; no token check, no redirect.
    Bypass,
    /// Let the navigation proceed unchanged.
    Allow,
    /// Send the visitor to the public landing path.
    RedirectToLanding,
    /// Send the signed-in visitor to the dashboard.
    RedirectToDashboard,
}

/// Decide what to do with a navigation to `path` given whether the session
/// cookie is present.
#[must_use]
pub fn decide(path: &str, has_token: bool) -> Decision {
    if is_bypassed(path) {
        return Decision::Bypass;
    }
    if PUBLIC_PATHS.contains(&path) {
        if path == LANDING_PATH && has_token {
            return Decision::RedirectToDashboard;
        }
        return Decision::Allow;
    }
    if is_protected(path) && !has_token {
        return Decision::RedirectToLanding;
    }
    // Unclassified paths fall through as allowed.
    Decision::Allow
}

/// Evaluate the guard for a navigation target.
///
/// Reads only the cookie copy of the token, never durable storage.
#[must_use]
pub fn evaluate(path: &str) -> Decision {
    let has_token = token_store::read_cookie(token_store::TOKEN_KEY).is_some();
    decide(path, has_token)
}

fn is_bypassed(path: &str) -> bool {
    path == "/favicon.ico"
        || BYPASS_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
        || BYPASS_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}
