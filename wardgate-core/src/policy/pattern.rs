//! Route pattern matching
//!
//! Patterns match either exactly or as a path-segment-aligned prefix:
//! `/drug` matches `/drug` and `/drug/123`, but never `/druggist` or
//! `/drug-order`.

use serde::{Deserialize, Serialize};

/// A normalized path pattern used in the access policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePattern(String);

impl RoutePattern {
    /// Create a new pattern, normalizing to a leading `/` and no trailing `/`
    /// (the root pattern `/` is kept as-is).
    pub fn new(pattern: impl Into<String>) -> Self {
        let mut pattern = pattern.into();
        if !pattern.starts_with('/') {
            pattern.insert(0, '/');
        }
        while pattern.len() > 1 && pattern.ends_with('/') {
            pattern.pop();
        }
        Self(pattern)
    }

    /// Pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether `path` matches this pattern.
    ///
    /// A match is the pattern itself, or any sub-path delimited by `/`.
    pub fn matches(&self, path: &str) -> bool {
        if path == self.0 {
            return true;
        }
        match path.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.starts_with('/'),
            None => false,
        }
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
