//! Redirect target configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Where unauthenticated callers land
    pub login_path: String,

    /// Where authenticated-but-unpermitted callers land
    pub home_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self { login_path: "/login".to_string(), home_path: "/home".to_string() }
    }
}

impl RedirectConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn apply_env_vars(&mut self) {
        if let Ok(path) = env::var("WG_LOGIN_PATH") {
            self.login_path = path;
        }
        if let Ok(path) = env::var("WG_HOME_PATH") {
            self.home_path = path;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.login_path.starts_with('/') {
            bail!("Login path must start with '/': {}", self.login_path);
        }
        if !self.home_path.starts_with('/') {
            bail!("Home path must start with '/': {}", self.home_path);
        }
        Ok(())
    }
}
