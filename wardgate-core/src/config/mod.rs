//! Configuration system for Wardgate
//!
//! One artifact defines the whole gate: the token cookie, the redirect
//! targets, and the policy tables. Values are resolved with a clear
//! supersedence hierarchy (highest priority wins):
//!
//! 1. **Code** (builder pattern)
//! 2. **Environment variables**
//! 3. **Config file** (wardgate.toml)
//! 4. **Defaults** (the portal's shipped policy table)
//!
//! # Example
//!
//! ```no_run
//! use wardgate_core::config::GateConfig;
//!
//! // Load with full supersedence
//! let config = GateConfig::load()?;
//!
//! // Or load from a specific file
//! let config = GateConfig::from_file("wardgate.toml")?;
//!
//! // Or use the shipped defaults
//! let config = GateConfig::default();
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod policy;
pub mod redirects;

pub use policy::PolicyConfig;
pub use redirects::RedirectConfig;

use crate::gate::RouteGate;
use crate::http::RouteGuard;
use crate::token::{CookieConfig, TokenCookie};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::Arc;

/// Complete gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub cookie: CookieConfig,
    pub redirects: RedirectConfig,
    pub policy: PolicyConfig,
}

impl GateConfig {
    /// Load configuration with the full supersedence chain
    pub fn load() -> Result<Self> {
        Self::load_from("wardgate.toml")
    }

    /// Load configuration from a specific file, then apply env overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let config: Self = toml::from_str(&content).context("Failed to parse TOML config")?;
        Ok(config)
    }

    /// Merge another configuration into this one (other wins)
    pub fn merge(&mut self, other: Self) {
        self.cookie = other.cookie;
        self.redirects.merge(other.redirects);
        self.policy.merge(other.policy);
    }

    /// Apply environment variable overrides
    pub fn apply_env_vars(&mut self) {
        if let Ok(name) = env::var("WG_COOKIE_NAME") {
            self.cookie.name = name;
        }
        self.redirects.apply_env_vars();
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.redirects.validate()?;
        self.policy.validate()?;
        Ok(())
    }

    /// Set the token cookie name
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie.name = name.into();
        self
    }

    /// Set the login redirect target
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.redirects.login_path = path.into();
        self
    }

    /// Set the home redirect target
    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.redirects.home_path = path.into();
        self
    }

    /// Build the immutable gate from this configuration
    pub fn build_gate(&self) -> RouteGate {
        RouteGate::new(
            self.policy.build_public_paths(),
            self.policy.build_access_policy(),
            TokenCookie::new(self.cookie.clone()),
        )
    }

    /// Build the request guard (gate plus redirect targets)
    pub fn build_guard(&self) -> RouteGuard {
        RouteGuard::new(Arc::new(self.build_gate()), self.redirects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validates() {
        assert!(GateConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GateConfig::default()
            .with_cookie_name("portal_token")
            .with_login_path("/sign-in")
            .with_home_path("/dashboard");

        assert_eq!(config.cookie.name, "portal_token");
        assert_eq!(config.redirects.login_path, "/sign-in");
        assert_eq!(config.redirects.home_path, "/dashboard");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[cookie]
name = "portal_token"
path = "/"
secure = true
http_only = true
same_site = "Strict"

[redirects]
login_path = "/sign-in"
home_path = "/dashboard"

[policy]
public = ["/", "/sign-in"]

[policy.roles]
"Admin" = ["/dashboard", "/user"]
"User" = ["/dashboard"]
"#
        )
        .unwrap();

        let config = GateConfig::load_from(file.path()).unwrap();
        assert_eq!(config.cookie.name, "portal_token");
        assert_eq!(config.redirects.home_path, "/dashboard");
        assert_eq!(config.policy.roles.len(), 2);
        assert!(config.policy.build_public_paths().contains("/sign-in"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GateConfig::load_from("/nonexistent/wardgate.toml").unwrap();
        assert_eq!(config.cookie.name, "token");
        assert_eq!(config.redirects.login_path, "/login");
    }

    #[test]
    fn test_invalid_config_rejected_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[redirects]
login_path = "login"
home_path = "/home"
"#
        )
        .unwrap();

        assert!(GateConfig::load_from(file.path()).is_err());
    }
}
