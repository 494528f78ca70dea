//! Prelude module for convenient imports.
//!
//! Import everything you need with a single line:
//!
//! ```rust,ignore
//! use wardgate_core::prelude::*;
//! ```

// === Configuration ===
pub use crate::config::{GateConfig, PolicyConfig, RedirectConfig};

// === Gate and decisions ===
pub use crate::gate::{Decision, RouteGate};

// === HTTP integration ===
pub use crate::http::{redirect_response, GuardResult, RouteGuard};

// === Policy tables ===
pub use crate::policy::{AccessPolicy, PublicPathSet, Role, RoutePattern};

// === Token handling ===
pub use crate::token::{Claims, CookieConfig, CookieReader, TokenCookie, TokenError};

// === HTTP essentials (re-exported from the `http` crate) ===
pub use http::Request;
pub use http::Response;
pub use http::StatusCode;

// === Response body helpers (re-exported from `http-body-util`) ===
pub use http_body_util::Full;
