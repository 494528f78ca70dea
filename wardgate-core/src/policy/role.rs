//! Role identity for route authorization

use serde::{Deserialize, Serialize};

/// A named identity class carried in a token's role claim.
///
/// Roles are deployment configuration, not a compiled-in enum: the portal
/// defines them in its policy table ("Admin", "Manager", "Healthcare Staff",
/// "Canteen Staff", "User"). Comparison is case-sensitive and exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a new role
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Role name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_equality_is_case_sensitive() {
        assert_eq!(Role::new("Admin"), Role::from("Admin"));
        assert_ne!(Role::new("Admin"), Role::new("admin"));
    }

    #[test]
    fn test_role_with_spaces() {
        let role = Role::new("Healthcare Staff");
        assert_eq!(role.as_str(), "Healthcare Staff");
        assert_eq!(role.to_string(), "Healthcare Staff");
    }
}
