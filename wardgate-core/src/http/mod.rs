//! HTTP integration for the authorization gate
//!
//! Adapts gate decisions to the wire: a guard that checks incoming
//! `http::Request`s and, when the gate says redirect, builds the 302
//! response the browser follows.
//!
//! The check is synchronous - the gate performs no I/O - so it can run in
//! front of async handlers without awaiting anything.

mod guard;
mod redirect;

pub use guard::{GuardResult, RouteGuard};
pub use redirect::redirect_response;
