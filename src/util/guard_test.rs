use super::*;
use crate::net::types::{AccountKind, AccountProfile};
use crate::state::session::{Account, SessionState};

fn unknown() -> SessionState {
    SessionState::default()
}

fn unauthenticated() -> SessionState {
    let mut state = SessionState::default();
    state.resolve(0, None);
    state
}

fn authenticated(kind: AccountKind) -> SessionState {
    let mut state = SessionState::default();
    state.resolve(
        0,
        Some(Account {
            kind,
            profile: AccountProfile {
                id: "id-1".to_owned(),
                extra: serde_json::Map::new(),
            },
        }),
    );
    state
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn protected_waits_while_session_is_unknown() {
    assert_eq!(protected_decision(&unknown()), GuardDecision::Wait);
}

#[test]
fn protected_allows_authenticated_sessions() {
    assert_eq!(
        protected_decision(&authenticated(AccountKind::Volunteer)),
        GuardDecision::Allow
    );
}

#[test]
fn protected_redirects_unauthenticated_to_login() {
    assert_eq!(
        protected_decision(&unauthenticated()),
        GuardDecision::Redirect(LOGIN_ROUTE)
    );
}

// =============================================================
// Restricted routes
// =============================================================

#[test]
fn restricted_waits_while_session_is_unknown() {
    assert_eq!(restricted_decision(&unknown()), GuardDecision::Wait);
}

#[test]
fn restricted_allows_unauthenticated_visitors() {
    assert_eq!(restricted_decision(&unauthenticated()), GuardDecision::Allow);
}

#[test]
fn restricted_redirects_authenticated_to_home() {
    assert_eq!(
        restricted_decision(&authenticated(AccountKind::Organization)),
        GuardDecision::Redirect(HOME_ROUTE)
    );
}
