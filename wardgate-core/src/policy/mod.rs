//! Route access policy for the portal
//!
//! This module provides the static authorization tables the gate consults:
//! - [`Role`] - named identity classes carried in token claims
//! - [`RoutePattern`] - exact-or-prefix path patterns (segment-aligned)
//! - [`AccessPolicy`] - role to allowed-routes mapping
//! - [`PublicPathSet`] - paths exempt from authentication entirely
//!
//! Policy structures are built once at startup and never mutated afterwards,
//! so they can be shared freely across concurrent requests.

mod access;
mod pattern;
mod role;

pub use access::{AccessPolicy, PublicPathSet};
pub use pattern::RoutePattern;
pub use role::Role;
