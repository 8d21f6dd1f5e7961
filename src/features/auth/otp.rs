//! Pending-OTP marker: the expiry-gated predicate behind `/verify-otp`.
//!
//! Registration leaves an email marker plus an expiry timestamp in storage;
//! the verify screen is reachable only while that marker is fresh. The
//! predicate is re-evaluated on every call and purges its own backing state
//! when it finds the marker expired, so stale markers cannot grant access
//! and need no separate cleanup pass.

use crate::features::auth::session::SessionStore;

/// Storage key for the email awaiting verification.
pub const PENDING_EMAIL_KEY: &str = "hireflow.pending_email";
/// Storage key for the marker expiry, Unix milliseconds as a decimal string.
pub const OTP_EXPIRES_KEY: &str = "hireflow.otp_expires_at";

/// Records that `email` has an OTP outstanding until `expires_at_ms`.
pub fn begin_verification(store: &impl SessionStore, email: &str, expires_at_ms: u64) {
    store.set(PENDING_EMAIL_KEY, email);
    store.set(OTP_EXPIRES_KEY, &expires_at_ms.to_string());
}

/// Drops the marker, e.g. after successful verification or on logout.
pub fn clear_verification(store: &impl SessionStore) {
    store.remove(PENDING_EMAIL_KEY);
    store.remove(OTP_EXPIRES_KEY);
}

/// True while an unexpired verification marker exists.
///
/// Expired or unparsable markers are cleared as a side effect and read as
/// absent.
pub fn has_pending_verification(store: &impl SessionStore, now_ms: u64) -> bool {
    pending_email(store, now_ms).is_some()
}

/// The email awaiting verification, subject to the same expiry rule.
pub fn pending_email(store: &impl SessionStore, now_ms: u64) -> Option<String> {
    let email = store.get(PENDING_EMAIL_KEY)?;
    let raw_expiry = store.get(OTP_EXPIRES_KEY)?;

    let fresh = raw_expiry
        .trim()
        .parse::<u64>()
        .is_ok_and(|expires_at| now_ms < expires_at);
    if !fresh {
        clear_verification(store);
        return None;
    }

    Some(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::MemoryStore;

    const NOW: u64 = 1_700_000_000_000;

    #[test]
    fn absent_marker_is_not_pending() {
        let store = MemoryStore::new();
        assert!(!has_pending_verification(&store, NOW));
    }

    #[test]
    fn fresh_marker_is_pending_and_yields_the_email() {
        let store = MemoryStore::new();
        begin_verification(&store, "ada@example.com", NOW + 60_000);

        assert!(has_pending_verification(&store, NOW));
        assert_eq!(
            pending_email(&store, NOW),
            Some("ada@example.com".to_string())
        );
    }

    #[test]
    fn expired_marker_reads_false_and_self_heals() {
        let store = MemoryStore::new();
        begin_verification(&store, "ada@example.com", NOW - 1);

        assert!(!has_pending_verification(&store, NOW));
        // The backing state is gone, not just masked.
        assert_eq!(store.get(PENDING_EMAIL_KEY), None);
        assert_eq!(store.get(OTP_EXPIRES_KEY), None);
        assert!(!has_pending_verification(&store, NOW));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let store = MemoryStore::new();
        begin_verification(&store, "ada@example.com", NOW);
        assert!(!has_pending_verification(&store, NOW));
    }

    #[test]
    fn missing_expiry_key_reads_false() {
        let store = MemoryStore::new();
        store.set(PENDING_EMAIL_KEY, "ada@example.com");
        assert!(!has_pending_verification(&store, NOW));
    }

    #[test]
    fn garbage_expiry_is_treated_as_expired_and_cleared() {
        let store = MemoryStore::new();
        store.set(PENDING_EMAIL_KEY, "ada@example.com");
        store.set(OTP_EXPIRES_KEY, "soon");

        assert!(!has_pending_verification(&store, NOW));
        assert_eq!(store.get(PENDING_EMAIL_KEY), None);
    }

    #[test]
    fn resend_refreshes_the_expiry() {
        let store = MemoryStore::new();
        begin_verification(&store, "ada@example.com", NOW + 10);
        begin_verification(&store, "ada@example.com", NOW + 120_000);

        assert!(has_pending_verification(&store, NOW + 60_000));
    }
}
