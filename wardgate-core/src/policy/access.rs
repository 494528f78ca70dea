//! Access policy: role to allowed-routes mapping

use super::{Role, RoutePattern};
use std::collections::{BTreeMap, HashSet};

/// Paths exempt from authentication entirely (login, password recovery).
///
/// Membership is exact-match only: `/login` exempts `/login`, not
/// `/login/anything`.
#[derive(Debug, Clone, Default)]
pub struct PublicPathSet {
    paths: HashSet<String>,
}

impl PublicPathSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a public path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.insert(path.into());
        self
    }

    /// Check whether `path` is public (exact match)
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of public paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PublicPathSet {
    fn from_iter<I: IntoIterator<Item = S>>(paths: I) -> Self {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }
}

/// Role to allowed-routes mapping.
///
/// Built once at startup and treated as immutable afterwards. Lookup is an
/// OR across the caller's roles: a user holding several roles is granted the
/// union of their route sets.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    routes: BTreeMap<Role, Vec<RoutePattern>>,
}

impl AccessPolicy {
    /// Create an empty policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route pattern to a role's allowed set
    pub fn with_route(mut self, role: impl Into<Role>, pattern: impl Into<RoutePattern>) -> Self {
        self.routes.entry(role.into()).or_default().push(pattern.into());
        self
    }

    /// Add several route patterns to a role's allowed set
    pub fn with_routes<P: Into<RoutePattern>>(
        mut self,
        role: impl Into<Role>,
        patterns: impl IntoIterator<Item = P>,
    ) -> Self {
        self.routes.entry(role.into()).or_default().extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Route patterns allowed for a single role (empty for unknown roles)
    pub fn routes_for(&self, role: &Role) -> &[RoutePattern] {
        self.routes.get(role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether any of `roles` grants access to `path`
    pub fn allows(&self, roles: &[Role], path: &str) -> bool {
        roles
            .iter()
            .flat_map(|role| self.routes_for(role))
            .any(|pattern| pattern.matches(path))
    }

    /// Check whether `path` falls under any role's route set.
    ///
    /// This is the derived route-matcher list: the HTTP layer consults the
    /// gate only for guarded paths, so the inclusion list always agrees with
    /// the policy table instead of being maintained by hand. Paths outside
    /// every role's set bypass the gate entirely.
    pub fn guards(&self, path: &str) -> bool {
        self.routes.values().flatten().any(|pattern| pattern.matches(path))
    }

    /// Roles defined in the policy
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.routes.keys()
    }
}
