//! Token cookie management

use serde::{Deserialize, Serialize};

/// SameSite cookie policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSitePolicy {
    Strict,
    Lax,
    None,
}

/// Cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Cookie path
    pub path: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// HttpOnly flag (no JavaScript access)
    pub http_only: bool,

    /// SameSite policy
    pub same_site: SameSitePolicy,

    /// Max age in seconds
    pub max_age: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            path: "/".to_string(),
            secure: true,    // HTTPS by default
            http_only: true, // XSS protection
            same_site: SameSitePolicy::Lax,
            max_age: Some(86400), // 24 hours
        }
    }
}

/// Named token cookie: extraction from request headers and Set-Cookie
/// building for the login/logout surface.
#[derive(Debug, Clone)]
pub struct TokenCookie {
    config: CookieConfig,
}

impl TokenCookie {
    /// Create a new token cookie from configuration
    pub fn new(config: CookieConfig) -> Self {
        Self { config }
    }

    /// Cookie name the gate reads
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Build a Set-Cookie header value carrying `token`
    pub fn build_set_cookie(&self, token: &str) -> String {
        let mut parts = vec![format!("{}={}", self.config.name, token)];

        parts.push(format!("Path={}", self.config.path));

        if let Some(max_age) = self.config.max_age {
            parts.push(format!("Max-Age={}", max_age));
        }

        if self.config.secure {
            parts.push("Secure".to_string());
        }

        if self.config.http_only {
            parts.push("HttpOnly".to_string());
        }

        let same_site = match self.config.same_site {
            SameSitePolicy::Strict => "Strict",
            SameSitePolicy::Lax => "Lax",
            SameSitePolicy::None => "None",
        };
        parts.push(format!("SameSite={}", same_site));

        parts.join("; ")
    }

    /// Build a delete cookie header (Max-Age=0)
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; Path={}; Max-Age=0", self.config.name, self.config.path)
    }

    /// Extract the token from a Cookie header
    pub fn extract_from_header(&self, cookie_header: &str) -> Option<String> {
        find_in_header(cookie_header, &self.config.name)
    }
}

/// Find a named cookie's value inside a Cookie header
pub(crate) fn find_in_header(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header.split(';').find_map(|cookie| {
        let cookie = cookie.trim();
        cookie.strip_prefix(&format!("{}=", name)).map(|value| value.to_string())
    })
}
