//! Route authorization gate
//!
//! The gate intercepts every navigation to a guarded path and issues one of
//! three decisions: let the request through, send the caller to the login
//! page, or send an authenticated-but-unpermitted caller back home.
//!
//! Evaluation is a pure function of the request path, the cookie snapshot,
//! and the immutable policy tables - no I/O, no shared mutable state, safe
//! to run from any number of concurrent requests.

use crate::policy::{AccessPolicy, PublicPathSet};
use crate::token::{Claims, CookieReader, TokenCookie};

/// Outcome of an authorization check.
///
/// Ephemeral: computed per request, never persisted, recomputed fresh on the
/// next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request may proceed to its handler
    Allow,

    /// No identity could be established (missing or malformed token)
    RedirectToLogin,

    /// Identity established but no held role grants the path.
    ///
    /// The home path itself must be granted to every issuable role (or be
    /// public): a caller whose roles grant nothing is redirected to home,
    /// and if home then redirects too, the browser loops. The shipped
    /// policy table grants `/home` to all five roles.
    RedirectToHome,
}

/// The route authorization gate.
///
/// Holds the startup-built policy tables and the name of the token cookie.
/// Every failure path folds into a redirect decision - nothing is thrown to
/// the caller (fail closed).
#[derive(Debug, Clone)]
pub struct RouteGate {
    public: PublicPathSet,
    policy: AccessPolicy,
    cookie: TokenCookie,
}

impl RouteGate {
    /// Create a gate from its policy tables and cookie configuration
    pub fn new(public: PublicPathSet, policy: AccessPolicy, cookie: TokenCookie) -> Self {
        Self { public, policy, cookie }
    }

    /// Decide whether a navigation to `path` may proceed.
    ///
    /// `path` is the normalized URL path only - non-empty, starting with
    /// `/`, no query string.
    ///
    /// The step order is a correctness property and must not change:
    /// public-path exemption dominates the token check (public pages never
    /// inspect cookies), and malformed-token handling dominates role checks
    /// (a garbage token is treated exactly like a missing one, so the
    /// response never reveals why authentication failed).
    pub fn authorize<C: CookieReader + ?Sized>(&self, path: &str, cookies: &C) -> Decision {
        // 1. Public-path exemption (exact match), no token inspection
        if self.public.contains(path) {
            return Decision::Allow;
        }

        // 2. Token presence
        let Some(token) = cookies.cookie(self.cookie.name()) else {
            log::debug!("No token cookie for {}, redirecting to login", path);
            return Decision::RedirectToLogin;
        };

        // 3. Token decode (unverified, routing only)
        let claims = match Claims::decode_unverified(&token) {
            Ok(claims) => claims,
            Err(err) => {
                log::warn!("Malformed token on {}: {}", path, err);
                return Decision::RedirectToLogin;
            }
        };

        // 4-6. Role extraction and union lookup across held roles
        let roles = claims.roles();
        if self.policy.allows(&roles, path) {
            log::debug!("Access granted: {:?} -> {}", roles, path);
            return Decision::Allow;
        }

        // 7. Authenticated but unpermitted
        log::debug!("Access denied: {:?} -> {}, redirecting home", roles, path);
        Decision::RedirectToHome
    }

    /// Whether the gate guards `path` at all.
    ///
    /// Derived from the policy table (union of every role's routes); paths
    /// outside it bypass authorization entirely, exactly as the portal's
    /// route matcher omits them.
    pub fn guards(&self, path: &str) -> bool {
        self.policy.guards(path)
    }

    /// The token cookie the gate reads
    pub fn cookie(&self) -> &TokenCookie {
        &self.cookie
    }

    /// The public-path table
    pub fn public_paths(&self) -> &PublicPathSet {
        &self.public
    }

    /// The role-routes table
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::CookieConfig;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use std::collections::HashMap;

    fn gate() -> RouteGate {
        let public = PublicPathSet::new()
            .with_path("/")
            .with_path("/login")
            .with_path("/forgot-password");
        let policy = AccessPolicy::new()
            .with_routes("Admin", ["/home", "/user", "/drug"])
            .with_routes("Healthcare Staff", ["/home", "/drug"])
            .with_routes("Canteen Staff", ["/home", "/canteen-item"])
            .with_routes("User", ["/home", "/survey"]);
        RouteGate::new(public, policy, TokenCookie::new(CookieConfig::default()))
    }

    fn cookies_with_roles(roles: &str) -> HashMap<String, String> {
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"role":{}}}"#, roles).as_bytes());
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        HashMap::from([("token".to_string(), format!("{}.{}.sig", header, payload))])
    }

    #[test]
    fn test_public_path_allows_without_cookies() {
        let gate = gate();
        assert_eq!(gate.authorize("/", &HashMap::<String, String>::new()), Decision::Allow);
        assert_eq!(gate.authorize("/login", &HashMap::<String, String>::new()), Decision::Allow);
    }

    #[test]
    fn test_public_path_allows_with_corrupt_cookie() {
        let gate = gate();
        let cookies = HashMap::from([("token".to_string(), "garbage".to_string())]);
        assert_eq!(gate.authorize("/login", &cookies), Decision::Allow);
    }

    #[test]
    fn test_missing_token_redirects_to_login() {
        assert_eq!(gate().authorize("/home", &HashMap::<String, String>::new()), Decision::RedirectToLogin);
    }

    #[test]
    fn test_malformed_token_redirects_to_login() {
        let cookies = HashMap::from([("token".to_string(), "not-a-jwt".to_string())]);
        assert_eq!(gate().authorize("/home", &cookies), Decision::RedirectToLogin);
    }

    #[test]
    fn test_role_grants_its_routes() {
        let gate = gate();
        let cookies = cookies_with_roles(r#""Healthcare Staff""#);
        assert_eq!(gate.authorize("/drug", &cookies), Decision::Allow);
        assert_eq!(gate.authorize("/drug/123", &cookies), Decision::Allow);
    }

    #[test]
    fn test_unpermitted_path_redirects_home() {
        let gate = gate();
        let cookies = cookies_with_roles(r#""Healthcare Staff""#);
        assert_eq!(gate.authorize("/user", &cookies), Decision::RedirectToHome);
    }

    #[test]
    fn test_multi_role_union() {
        let gate = gate();
        let cookies = cookies_with_roles(r#"["Canteen Staff","User"]"#);
        assert_eq!(gate.authorize("/canteen-item/123", &cookies), Decision::Allow);
        assert_eq!(gate.authorize("/survey", &cookies), Decision::Allow);
        assert_eq!(gate.authorize("/user", &cookies), Decision::RedirectToHome);
    }

    #[test]
    fn test_empty_role_set_redirects_home() {
        let gate = gate();
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"u-1"}"#);
        let cookies =
            HashMap::from([("token".to_string(), format!("{}.{}.sig", header, payload))]);
        assert_eq!(gate.authorize("/home", &cookies), Decision::RedirectToHome);
    }

    #[test]
    fn test_segment_aligned_prefix() {
        let gate = gate();
        let cookies = cookies_with_roles(r#""Healthcare Staff""#);
        assert_eq!(gate.authorize("/drug-order", &cookies), Decision::RedirectToHome);
        assert_eq!(gate.authorize("/druggist", &cookies), Decision::RedirectToHome);
    }

    #[test]
    fn test_idempotence() {
        let gate = gate();
        let cookies = cookies_with_roles(r#""User""#);
        let first = gate.authorize("/survey", &cookies);
        let second = gate.authorize("/survey", &cookies);
        assert_eq!(first, second);
    }

    #[test]
    fn test_guards_follows_policy_table() {
        let gate = gate();
        assert!(gate.guards("/user"));
        assert!(gate.guards("/drug/42"));
        // Not in any role's set: the portal's matcher omits it, so the gate
        // is never consulted for it.
        assert!(!gate.guards("/static/logo.png"));
    }
}
