//! Policy table configuration
//!
//! The role-routes table and the public-path list live in one artifact; the
//! route-matcher inclusion list is derived from it at startup, never
//! maintained by hand in a second place.

use crate::policy::{AccessPolicy, PublicPathSet};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Paths exempt from authentication entirely (exact match)
    pub public: Vec<String>,

    /// Role name to allowed route patterns
    pub roles: BTreeMap<String, Vec<String>>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let all_routes = vec![
            "/home".to_string(),
            "/user".to_string(),
            "/drug".to_string(),
            "/drug-order".to_string(),
            "/appointment".to_string(),
            "/canteen-item".to_string(),
            "/canteen-order".to_string(),
            "/insurance".to_string(),
            "/survey".to_string(),
            "/notification".to_string(),
            "/profile".to_string(),
        ];

        let mut roles = BTreeMap::new();
        roles.insert("Admin".to_string(), all_routes.clone());
        // Manager currently mirrors Admin but stays an independent entry;
        // edit the two lists separately.
        roles.insert("Manager".to_string(), all_routes);
        roles.insert(
            "Healthcare Staff".to_string(),
            vec![
                "/home".to_string(),
                "/drug".to_string(),
                "/drug-order".to_string(),
                "/appointment".to_string(),
                "/insurance".to_string(),
                "/profile".to_string(),
            ],
        );
        roles.insert(
            "Canteen Staff".to_string(),
            vec![
                "/home".to_string(),
                "/canteen-item".to_string(),
                "/canteen-order".to_string(),
                "/profile".to_string(),
            ],
        );
        roles.insert(
            "User".to_string(),
            vec![
                "/home".to_string(),
                "/appointment".to_string(),
                "/survey".to_string(),
                "/notification".to_string(),
                "/profile".to_string(),
            ],
        );

        Self {
            public: vec![
                "/".to_string(),
                "/login".to_string(),
                "/forgot-password".to_string(),
                "/reset-password".to_string(),
            ],
            roles,
        }
    }
}

impl PolicyConfig {
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    pub fn validate(&self) -> Result<()> {
        for path in &self.public {
            if !path.starts_with('/') {
                bail!("Public path must start with '/': {}", path);
            }
        }
        for (role, routes) in &self.roles {
            if role.trim().is_empty() {
                bail!("Role names must not be empty");
            }
            for route in routes {
                if !route.starts_with('/') {
                    bail!("Route for role '{}' must start with '/': {}", role, route);
                }
            }
        }
        Ok(())
    }

    /// Build the immutable role-routes table
    pub fn build_access_policy(&self) -> AccessPolicy {
        self.roles.iter().fold(AccessPolicy::new(), |policy, (role, routes)| {
            policy.with_routes(role.as_str(), routes.iter().map(String::as_str))
        })
    }

    /// Build the immutable public-path table
    pub fn build_public_paths(&self) -> PublicPathSet {
        self.public.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Role;

    #[test]
    fn test_default_policy_validates() {
        assert!(PolicyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_admin_and_manager_hold_equal_routes() {
        let config = PolicyConfig::default();
        assert_eq!(config.roles["Admin"], config.roles["Manager"]);
    }

    #[test]
    fn test_every_shipped_role_holds_the_home_route() {
        // A role without /home would bounce between the home redirect and
        // its own denial; the shipped table must never ship such a role.
        let config = PolicyConfig::default();
        for (role, routes) in &config.roles {
            assert!(routes.contains(&"/home".to_string()), "role {} lacks /home", role);
        }
    }

    #[test]
    fn test_invalid_route_rejected() {
        let mut config = PolicyConfig::default();
        config.roles.insert("Admin".to_string(), vec!["drug".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_tables() {
        let config = PolicyConfig::default();
        let policy = config.build_access_policy();
        let public = config.build_public_paths();

        assert!(policy.allows(&[Role::new("Healthcare Staff")], "/drug"));
        assert!(!policy.allows(&[Role::new("Healthcare Staff")], "/user"));
        assert!(public.contains("/login"));
        assert!(!public.contains("/home"));
    }
}
