//! Wardgate - Core
//!
//! Role-based route authorization for the care-facility admin portal.
//!
//! # Overview
//!
//! Wardgate sits in front of the portal's pages and decides, for every
//! navigation to a guarded path, whether the request may proceed. The
//! decision pipeline: public-path exemption, token-cookie presence, claims
//! decode, role extraction, role-to-routes lookup, allow or redirect.
//!
//! Every failure path resolves to a redirect - unauthenticated callers land
//! on the login page, authenticated-but-unpermitted callers on the home
//! page, never a raw error. The gate is a pure function of the request
//! path, the cookie snapshot, and the startup-built policy tables.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use wardgate_core::prelude::*;
//!
//! let guard = GateConfig::load()?.build_guard();
//!
//! // In the request handler, before dispatching to a page:
//! match guard.check(&request) {
//!     GuardResult::Allow => { /* continue to the page handler */ }
//!     GuardResult::Deny(redirect) => return Ok(redirect),
//! }
//! ```
//!
//! # Architecture
//!
//! - [`config`] - one configuration artifact (TOML + env + builder) for the
//!   cookie, the redirect targets, and the policy tables
//! - [`policy`] - roles, segment-aligned route patterns, access policy
//! - [`token`] - token cookie extraction and unverified claims decoding
//! - [`gate`] - the authorization decision engine
//! - [`http`] - hyper integration: request guard and redirect responses
//!
//! # What this is not
//!
//! The claims decode performs **no signature or expiry verification** - it
//! exists to pick routes, not to authenticate. Every "Allow" ultimately
//! reaches the API backend, which owns genuine authentication.

pub mod config;
pub mod gate;
pub mod http;
pub mod policy;
pub mod token;

pub mod prelude;
