use super::*;
use crate::net::types::AccountProfile;

fn profile(id: &str) -> AccountProfile {
    AccountProfile {
        id: id.to_owned(),
        extra: serde_json::Map::new(),
    }
}

fn account(kind: AccountKind, id: &str) -> Account {
    Account {
        kind,
        profile: profile(id),
    }
}

/// Role and profile are both absent or both present, never one without the
/// other.
fn kind_and_profile_agree(state: &SessionState) {
    assert_eq!(state.account_kind().is_none(), state.profile().is_none());
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_unknown_and_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_resolved());
    assert!(!state.is_authenticated());
    assert_eq!(state.account_kind(), None);
    assert_eq!(state.profile(), None);
    assert_eq!(state.epoch(), 0);
    kind_and_profile_agree(&state);
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn resolve_success_authenticates_with_kind_and_profile() {
    let mut state = SessionState::default();
    assert!(state.resolve(0, Some(account(AccountKind::Volunteer, "u1"))));
    assert!(state.is_resolved());
    assert!(state.is_authenticated());
    assert_eq!(state.account_kind(), Some(AccountKind::Volunteer));
    assert_eq!(state.profile().map(|p| p.id.as_str()), Some("u1"));
    kind_and_profile_agree(&state);
}

#[test]
fn resolve_failure_ends_resolved_and_unauthenticated() {
    let mut state = SessionState::default();
    assert!(state.resolve(0, None));
    assert!(state.is_resolved());
    assert!(!state.is_authenticated());
    kind_and_profile_agree(&state);
}

#[test]
fn second_resolution_is_dropped() {
    let mut state = SessionState::default();
    assert!(state.resolve(0, None));
    assert!(!state.resolve(0, Some(account(AccountKind::Volunteer, "u1"))));
    assert!(!state.is_authenticated());
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn login_success_after_unauthenticated_resolution() {
    let mut state = SessionState::default();
    state.resolve(0, None);
    let started = state.epoch();
    assert!(state.login_succeeded(started, account(AccountKind::Volunteer, "u1")));
    assert!(state.is_authenticated());
    assert_eq!(state.account_kind(), Some(AccountKind::Volunteer));
    kind_and_profile_agree(&state);
}

#[test]
fn stale_login_completion_is_dropped() {
    let mut state = SessionState::default();
    state.resolve(0, None);
    let started = state.epoch();
    // A logout (or anything else) applied while the login was in flight.
    assert!(state.logout_finished(started));
    let before = state.clone();
    assert!(!state.login_succeeded(started, account(AccountKind::Volunteer, "u1")));
    assert_eq!(state, before);
}

#[test]
fn every_applied_transition_bumps_the_epoch() {
    let mut state = SessionState::default();
    state.resolve(0, None);
    assert_eq!(state.epoch(), 1);
    state.login_succeeded(1, account(AccountKind::Organization, "o1"));
    assert_eq!(state.epoch(), 2);
    state.logout_finished(2);
    assert_eq!(state.epoch(), 3);
}

// =============================================================
// Logout transitions
// =============================================================

#[test]
fn logout_clears_role_and_profile_together() {
    let mut state = SessionState::default();
    state.resolve(0, Some(account(AccountKind::Organization, "o1")));
    let started = state.epoch();
    assert!(state.logout_finished(started));
    assert!(state.is_resolved());
    assert!(!state.is_authenticated());
    assert_eq!(state.account_kind(), None);
    assert_eq!(state.profile(), None);
    kind_and_profile_agree(&state);
}

#[test]
fn stale_logout_completion_is_dropped() {
    let mut state = SessionState::default();
    state.resolve(0, Some(account(AccountKind::Volunteer, "u1")));
    let started = state.epoch();
    state.login_succeeded(started, account(AccountKind::Volunteer, "u2"));
    let before = state.clone();
    assert!(!state.logout_finished(started));
    assert_eq!(state, before);
}

// =============================================================
// Invariant across operation sequences
// =============================================================

#[test]
fn kind_and_profile_agree_across_full_lifecycle() {
    let mut state = SessionState::default();
    kind_and_profile_agree(&state);

    state.resolve(0, None);
    kind_and_profile_agree(&state);

    let started = state.epoch();
    state.login_succeeded(started, account(AccountKind::Volunteer, "u1"));
    kind_and_profile_agree(&state);

    let started = state.epoch();
    state.logout_finished(started);
    kind_and_profile_agree(&state);
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_trim_email_and_keep_password_verbatim() {
    let creds = Credentials::new("  a@b.com  ", "p w").unwrap();
    assert_eq!(creds.email(), "a@b.com");
    assert_eq!(creds.password(), "p w");
}

#[test]
fn credentials_reject_empty_email() {
    assert_eq!(Credentials::new("   ", "pw"), Err("Enter your email."));
}

#[test]
fn credentials_reject_empty_password() {
    assert_eq!(Credentials::new("a@b.com", ""), Err("Enter your password."));
}
