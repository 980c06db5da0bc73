//! Pure navigation predicates for the route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoutes` and `RestrictedRoutes` must treat the unresolved
//! startup state identically; both decisions live here so the contract is
//! testable without a DOM.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;

/// Route the guards send unauthenticated visitors to.
pub const LOGIN_ROUTE: &str = "/login";

/// Default landing route for authenticated accounts.
pub const HOME_ROUTE: &str = "/map";

/// What a guard should render for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still unresolved: show the loading placeholder, no redirect.
    Wait,
    /// Render the nested route tree.
    Allow,
    /// Redirect to the given route.
    Redirect(&'static str),
}

/// Decision for routes that require an authenticated session.
pub fn protected_decision(state: &SessionState) -> GuardDecision {
    if !state.is_resolved() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Decision for the login/register routes that only unauthenticated
/// visitors should see.
pub fn restricted_decision(state: &SessionState) -> GuardDecision {
    if !state.is_resolved() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Redirect(HOME_ROUTE)
    } else {
        GuardDecision::Allow
    }
}
