//! Tests for the navigation guard decision table.

#[cfg(test)]
mod tests {
    use crate::guard::{DASHBOARD_PATH, Decision, LANDING_PATH, decide};

    /// Protected paths without a token redirect to the landing page.
    #[test]
    fn protected_without_token_redirects_to_landing() {
        for path in [
            "/dashboard",
            "/dashboard/courses",
            "/dashboard/courses/3f2b6a1e",
            "/dashboard/assignments",
            "/dashboard/grades",
            "/dashboard/admin",
        ] {
            assert_eq!(
                decide(path, false),
                Decision::RedirectToLanding,
                "path {path} should bounce to landing"
            );
        }
    }

    /// Protected paths with a token render normally.
    #[test]
    fn protected_with_token_allows() {
        for path in ["/dashboard", "/dashboard/grades", "/dashboard/admin"] {
            assert_eq!(decide(path, true), Decision::Allow);
        }
    }

    /// The landing page with a token redirects straight to the dashboard.
    #[test]
    fn landing_with_token_redirects_to_dashboard() {
        assert_eq!(decide(LANDING_PATH, true), Decision::RedirectToDashboard);
    }

    /// The landing page without a token renders normally.
    #[test]
    fn landing_without_token_allows() {
        assert_eq!(decide(LANDING_PATH, false), Decision::Allow);
    }

    /// Login and register stay reachable regardless of token state.
    #[test]
    fn auth_pages_always_allowed() {
        for path in ["/login", "/register"] {
            assert_eq!(decide(path, false), Decision::Allow);
            assert_eq!(decide(path, true), Decision::Allow);
        }
    }

    /// Paths matching neither list pass through unchanged.
    #[test]
    fn unclassified_paths_allowed() {
        for path in ["/about", "/pricing", "/blog/launch-post"] {
            assert_eq!(decide(path, false), Decision::Allow);
            assert_eq!(decide(path, true), Decision::Allow);
        }
    }

    /// Infrastructure paths bypass the guard entirely, token or not.
    #[test]
    fn infrastructure_paths_bypass() {
        for path in [
            "/api/courses",
            "/api/auth/login",
            "/assets/index.css",
            "/static/logo.svg",
            "/favicon.ico",
            "/banner.png",
            "/hero.webp",
            "/team/photo.jpeg",
        ] {
            assert_eq!(decide(path, false), Decision::Bypass, "path {path}");
            assert_eq!(decide(path, true), Decision::Bypass, "path {path}");
        }
    }

    /// The two redirect targets are themselves classified sensibly, so a
    /// redirect can never loop.
    #[test]
    fn redirect_targets_terminate() {
        // Landing without a token: allowed, not redirected again.
        assert_eq!(decide(LANDING_PATH, false), Decision::Allow);
        // Dashboard with a token: allowed, not redirected again.
        assert_eq!(decide(DASHBOARD_PATH, true), Decision::Allow);
    }
}
