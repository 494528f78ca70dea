//! Token claims decoding and role-claim normalization

use super::TokenError;
use crate::policy::Role;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// Shape of the role claim as issued by the backend.
///
/// Tokens in the wild carry the claim as a single string for one role, an
/// array for several, or omit it entirely. The union is normalized into a
/// role set at this boundary so downstream logic never branches on claim
/// shape again.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoleClaim {
    /// Single role as a bare string
    One(String),

    /// Several roles as an array of strings
    Many(Vec<String>),

    /// Anything else (absent, null, a number...) - treated as no roles
    Other(serde_json::Value),
}

impl Default for RoleClaim {
    fn default() -> Self {
        RoleClaim::Other(serde_json::Value::Null)
    }
}

impl RoleClaim {
    /// Normalize into a canonical role set
    pub fn normalize(&self) -> Vec<Role> {
        match self {
            RoleClaim::One(role) => vec![Role::new(role.clone())],
            RoleClaim::Many(roles) => roles.iter().map(|role| Role::new(role.clone())).collect(),
            RoleClaim::Other(_) => vec![],
        }
    }
}

/// Decoded payload of a bearer token.
///
/// Only the fields the gate routes on are modeled; everything else in the
/// payload (`exp`, `iat`, issuer metadata) is ignored - expiry is the
/// issuing backend's concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    /// Subject identifier, when the issuer sets one
    #[serde(default)]
    pub sub: Option<String>,

    /// Role claim in whatever shape the issuer used
    #[serde(default)]
    pub role: RoleClaim,
}

impl Claims {
    /// Decode the claims payload of a JWT **without verifying anything**.
    ///
    /// This is a routing-convenience decode, not a security control: the
    /// signature segment is required to be present (three-segment shape) but
    /// is never checked, and expiry is not enforced. Genuine authentication
    /// happens at the API backend that issued the token.
    pub fn decode_unverified(token: &str) -> Result<Self, TokenError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (segments.next(), segments.next(), segments.next(), segments.next())
        else {
            return Err(TokenError::NotAJwt);
        };

        let payload = URL_SAFE_NO_PAD.decode(payload)?;
        let claims = serde_json::from_slice(&payload)?;
        Ok(claims)
    }

    /// The caller's roles, normalized from whatever shape the claim had
    pub fn roles(&self) -> Vec<Role> {
        self.role.normalize()
    }
}
