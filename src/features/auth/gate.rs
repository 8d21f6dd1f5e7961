//! The access gate: one pure decision shared by every guarded route.
//!
//! The guard components in `guards.rs` turn an outcome into a redirect or a
//! render; this module only decides. Re-evaluating the same inputs always
//! yields the same outcome.

use crate::features::auth::claims::Claims;
use crate::navigation::{intersects, Role};

/// Result of evaluating a route's access predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Allowed,
    /// No decodable, unexpired token.
    DenyUnauthenticated,
    /// Signed in, but the role set does not intersect the route's roles.
    DenyForbidden,
}

/// Evaluates the default predicate ("signed in") plus an optional role
/// restriction. An empty `required` slice means any authenticated user.
pub fn evaluate(claims: Option<&Claims>, required: &[Role], now_secs: u64) -> GateOutcome {
    let Some(claims) = claims else {
        return GateOutcome::DenyUnauthenticated;
    };
    if claims.is_expired(now_secs) {
        return GateOutcome::DenyUnauthenticated;
    }
    if required.is_empty() || intersects(required, &claims.roles) {
        GateOutcome::Allowed
    } else {
        GateOutcome::DenyForbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{ADMIN_ONLY, STAFF};
    use std::collections::BTreeSet;

    const NOW: u64 = 1_700_000_000;

    fn claims(roles: &[Role], expires_at: Option<u64>) -> Claims {
        Claims {
            username: "ada".to_string(),
            roles: roles.iter().copied().collect(),
            expires_at,
        }
    }

    #[test]
    fn no_claims_is_unauthenticated_for_any_route() {
        assert_eq!(
            evaluate(None, &[], NOW),
            GateOutcome::DenyUnauthenticated
        );
        assert_eq!(
            evaluate(None, ADMIN_ONLY, NOW),
            GateOutcome::DenyUnauthenticated
        );
    }

    #[test]
    fn expired_claims_are_unauthenticated_not_forbidden() {
        let expired = claims(&[Role::Admin], Some(NOW - 10));
        assert_eq!(
            evaluate(Some(&expired), ADMIN_ONLY, NOW),
            GateOutcome::DenyUnauthenticated
        );
    }

    #[test]
    fn role_intersection_allows() {
        let interviewer = claims(&[Role::Interviewer], None);
        assert_eq!(evaluate(Some(&interviewer), STAFF, NOW), GateOutcome::Allowed);
        assert_eq!(
            evaluate(Some(&interviewer), ADMIN_ONLY, NOW),
            GateOutcome::DenyForbidden
        );
    }

    #[test]
    fn empty_requirement_means_any_authenticated_user() {
        let no_roles = claims(&[], None);
        assert_eq!(evaluate(Some(&no_roles), &[], NOW), GateOutcome::Allowed);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let user = claims(&[Role::User], Some(NOW + 100));
        let first = evaluate(Some(&user), STAFF, NOW);
        let second = evaluate(Some(&user), STAFF, NOW);
        assert_eq!(first, second);
        assert_eq!(first, GateOutcome::DenyForbidden);
    }
}
