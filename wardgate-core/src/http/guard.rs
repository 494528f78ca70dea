//! Request guard wiring the gate into a hyper server

use super::redirect::redirect_response;
use crate::config::RedirectConfig;
use crate::gate::{Decision, RouteGate};
use bytes::Bytes;
use http::Request;
use http_body_util::Full;
use hyper::Response;
use std::sync::Arc;

/// Result of a guard check
#[derive(Debug)]
pub enum GuardResult {
    /// Request is allowed, continue to handler
    Allow,

    /// Request is denied, return this redirect response
    Deny(Response<Full<Bytes>>),
}

/// Per-request guard in front of the portal's protected routes.
///
/// Consults the gate only for paths the policy table guards; anything else
/// (static assets, API routes handled elsewhere) passes through untouched.
/// Redirect targets come from [`RedirectConfig`], so login and home pages
/// are deployment configuration rather than literals scattered in handlers.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    gate: Arc<RouteGate>,
    redirects: RedirectConfig,
}

impl RouteGuard {
    /// Create a new guard over a shared gate
    pub fn new(gate: Arc<RouteGate>, redirects: RedirectConfig) -> Self {
        Self { gate, redirects }
    }

    /// Check a request against the gate.
    ///
    /// Body type is generic: the guard only reads the path and headers.
    pub fn check<B>(&self, req: &Request<B>) -> GuardResult {
        let path = req.uri().path();

        // Paths outside the policy table bypass the gate (allow by omission)
        if !self.gate.guards(path) {
            return GuardResult::Allow;
        }

        match self.gate.authorize(path, req.headers()) {
            Decision::Allow => GuardResult::Allow,
            Decision::RedirectToLogin => {
                GuardResult::Deny(redirect_response(&self.redirects.login_path))
            }
            Decision::RedirectToHome => {
                GuardResult::Deny(redirect_response(&self.redirects.home_path))
            }
        }
    }

    /// The gate backing this guard
    pub fn gate(&self) -> &Arc<RouteGate> {
        &self.gate
    }

    /// The redirect targets this guard sends denied requests to
    pub fn redirects(&self) -> &RedirectConfig {
        &self.redirects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use http::StatusCode;

    fn guard() -> RouteGuard {
        let config = GateConfig::default();
        RouteGuard::new(Arc::new(config.build_gate()), config.redirects)
    }

    fn request(path: &str, token: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header("Cookie", format!("token={}", token));
        }
        builder.body(()).unwrap()
    }

    fn token_for(role: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"role":"{}"}}"#, role).as_bytes());
        format!("{}.{}.sig", header, payload)
    }

    #[test]
    fn test_unguarded_path_bypasses_gate() {
        // No cookie at all, but the path is in no role's table.
        let result = guard().check(&request("/static/app.css", None));
        assert!(matches!(result, GuardResult::Allow));
    }

    #[test]
    fn test_missing_token_redirects_to_login() {
        let GuardResult::Deny(resp) = guard().check(&request("/home", None)) else {
            panic!("expected deny");
        };
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("Location").unwrap(), "/login");
    }

    #[test]
    fn test_unpermitted_role_redirects_home() {
        let token = token_for("Canteen Staff");
        let GuardResult::Deny(resp) = guard().check(&request("/user", Some(&token))) else {
            panic!("expected deny");
        };
        assert_eq!(resp.headers().get("Location").unwrap(), "/home");
    }

    #[test]
    fn test_permitted_role_is_allowed() {
        let token = token_for("Canteen Staff");
        let result = guard().check(&request("/canteen-item/123", Some(&token)));
        assert!(matches!(result, GuardResult::Allow));
    }
}
