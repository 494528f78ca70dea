//! Bearer token handling
//!
//! The gate reads one named cookie from each request and decodes the JWT
//! payload it carries to learn the caller's roles:
//! - [`TokenCookie`] - named-cookie extraction and Set-Cookie building
//! - [`Claims`] - decoded payload with role-claim normalization
//! - [`CookieReader`] - read-only seam over request-scoped cookies
//!
//! ## Not an authentication boundary
//!
//! Decoding here reads the claims payload for routing purposes only. No
//! signature and no expiry is verified at this layer - trust in the token is
//! delegated to the issuing backend, which every "Allow" decision ultimately
//! reaches. See [`Claims::decode_unverified`].

mod claims;
mod cookie;

pub use claims::{Claims, RoleClaim};
pub use cookie::{CookieConfig, SameSitePolicy, TokenCookie};

/// Errors raised while decoding a bearer token.
///
/// None of these escape the gate: every decode failure folds into a
/// redirect-to-login decision. The variants exist so callers that want
/// diagnostics (logging, tests) can see why a token was rejected.
#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    NotAJwt,

    #[error("payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("claims payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only accessor for request-scoped cookies.
///
/// The gate reads exactly one named cookie through this seam; tests can
/// substitute a plain map, the HTTP layer passes request headers.
pub trait CookieReader {
    /// Value of the cookie named `name`, if present
    fn cookie(&self, name: &str) -> Option<String>;
}

impl CookieReader for http::HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get_all(http::header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|header| cookie::find_in_header(header, name))
    }
}

impl CookieReader for std::collections::HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
