//! Local decoding of the bearer-token payload.
//!
//! The middle segment of the token is base64url JSON carrying `username` and
//! `roles`. Decoding here is display-only: no signature check is performed
//! and none is intended, so these claims gate menus and redirects but never
//! substitute for the backend's own authorization. Swapping in a verified
//! claims source later keeps the same [`Claims`] output shape.

use crate::navigation::Role;
use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// Why a token could not be turned into claims.
///
/// Callers treat every variant the same way: downgrade to "not signed in".
/// The variants exist for logging and tests, not for user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// No token present at all.
    Missing,
    /// Not a three-segment `header.payload.signature` string.
    Malformed,
    /// The payload segment was not valid base64url.
    Base64,
    /// The decoded payload was not the expected JSON shape.
    Payload,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Missing => write!(formatter, "no token present"),
            DecodeError::Malformed => write!(formatter, "token is not in three-segment form"),
            DecodeError::Base64 => write!(formatter, "token payload is not valid base64url"),
            DecodeError::Payload => write!(formatter, "token payload is not valid claims JSON"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Claims recovered from a token payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub roles: BTreeSet<Role>,
    /// Unix seconds; tokens without `exp` never expire client-side.
    pub expires_at: Option<u64>,
}

impl Claims {
    pub fn is_expired(&self, now_secs: u64) -> bool {
        match self.expires_at {
            Some(expires_at) => now_secs >= expires_at,
            None => false,
        }
    }
}

#[derive(Deserialize)]
struct ClaimsPayload {
    username: String,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default)]
    exp: Option<u64>,
}

/// Decodes the payload segment of `token` into [`Claims`].
///
/// Never panics; every malformed input maps to a [`DecodeError`]. Unknown
/// role names are dropped rather than rejected.
pub fn extract_claims(token: Option<&str>) -> Result<Claims, DecodeError> {
    let token = token.ok_or(DecodeError::Missing)?;
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Missing);
    }

    let mut segments = trimmed.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DecodeError::Malformed);
    };

    let bytes = Base64UrlUnpadded::decode_vec(payload).map_err(|_| DecodeError::Base64)?;
    let parsed: ClaimsPayload =
        serde_json::from_slice(&bytes).map_err(|_| DecodeError::Payload)?;

    let roles = parsed
        .roles
        .iter()
        .filter_map(|name| Role::parse(name))
        .collect();

    Ok(Claims {
        username: parsed.username,
        roles,
        expires_at: parsed.exp,
    })
}

#[cfg(test)]
pub(crate) fn forge_token(payload: &serde_json::Value) -> String {
    let encoded = Base64UrlUnpadded::encode_string(payload.to_string().as_bytes());
    format!("eyJhbGciOiJIUzI1NiJ9.{encoded}.c2ln")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_username_roles_and_expiry() {
        let token = forge_token(&json!({
            "username": "ada",
            "roles": ["ADMIN", "USER"],
            "exp": 4_102_444_800u64,
        }));

        let claims = extract_claims(Some(&token)).unwrap();
        assert_eq!(claims.username, "ada");
        assert!(claims.roles.contains(&Role::Admin));
        assert!(claims.roles.contains(&Role::User));
        assert!(!claims.roles.contains(&Role::Interviewer));
        assert_eq!(claims.expires_at, Some(4_102_444_800));
    }

    #[test]
    fn missing_roles_defaults_to_empty_set() {
        let token = forge_token(&json!({ "username": "ada" }));
        let claims = extract_claims(Some(&token)).unwrap();
        assert!(claims.roles.is_empty());
        assert_eq!(claims.expires_at, None);
    }

    #[test]
    fn unknown_role_names_are_skipped() {
        let token = forge_token(&json!({
            "username": "ada",
            "roles": ["WIZARD", "INTERVIEWER"],
        }));
        let claims = extract_claims(Some(&token)).unwrap();
        assert_eq!(claims.roles.len(), 1);
        assert!(claims.roles.contains(&Role::Interviewer));
    }

    #[test]
    fn malformed_inputs_error_instead_of_panicking() {
        assert_eq!(extract_claims(None), Err(DecodeError::Missing));
        assert_eq!(extract_claims(Some("")), Err(DecodeError::Missing));
        assert_eq!(extract_claims(Some("   ")), Err(DecodeError::Missing));
        assert_eq!(extract_claims(Some("abc")), Err(DecodeError::Malformed));
        assert_eq!(extract_claims(Some("a.b")), Err(DecodeError::Malformed));
        assert_eq!(
            extract_claims(Some("a.b.c.d")),
            Err(DecodeError::Malformed)
        );
        assert_eq!(
            extract_claims(Some("head.!!not-base64!!.sig")),
            Err(DecodeError::Base64)
        );
    }

    #[test]
    fn valid_base64_with_bad_json_is_a_payload_error() {
        let encoded = Base64UrlUnpadded::encode_string(b"not json");
        let token = format!("head.{encoded}.sig");
        assert_eq!(extract_claims(Some(&token)), Err(DecodeError::Payload));
    }

    #[test]
    fn json_without_username_is_a_payload_error() {
        let encoded = Base64UrlUnpadded::encode_string(b"{\"roles\":[\"ADMIN\"]}");
        let token = format!("head.{encoded}.sig");
        assert_eq!(extract_claims(Some(&token)), Err(DecodeError::Payload));
    }

    #[test]
    fn expiry_comparison_is_inclusive() {
        let claims = Claims {
            username: "ada".to_string(),
            roles: BTreeSet::new(),
            expires_at: Some(100),
        };
        assert!(!claims.is_expired(99));
        assert!(claims.is_expired(100));
        assert!(claims.is_expired(101));
    }
}
