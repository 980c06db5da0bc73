//! Session state machine and store for the authenticated account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for whether the browser context is authenticated,
//! as whom, and under which role. Route guards and role-aware components
//! read snapshots; only the operations on [`SessionStore`] mutate the state.
//!
//! DESIGN
//! ======
//! The phase enum keeps the role and the profile record together, so one can
//! never be present without the other. Every applied transition bumps an
//! epoch counter, and async completions carry the epoch they started under;
//! a completion that lost the race is dropped instead of corrupting state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::error::ApiError;
use crate::net::types::{AccountKind, AccountProfile};

/// Authenticated identity: the role and the server profile record always
/// travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub kind: AccountKind,
    pub profile: AccountProfile,
}

/// Lifecycle of the session: unresolved at startup, then either side of
/// authenticated for the rest of the process lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    /// Startup check still in flight; consumers must treat the answer as
    /// unknown, distinct from both authenticated and unauthenticated.
    #[default]
    Unknown,
    Authenticated(Account),
    Unauthenticated,
}

/// Session state plus the generation counter guarding async completions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    phase: SessionPhase,
    epoch: u64,
}

impl SessionState {
    /// Generation counter; capture before a suspension point and pass back
    /// into the transition so stale completions are dropped.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the startup check has completed, either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self.phase, SessionPhase::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    pub fn account_kind(&self) -> Option<AccountKind> {
        match &self.phase {
            SessionPhase::Authenticated(account) => Some(account.kind),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&AccountProfile> {
        match &self.phase {
            SessionPhase::Authenticated(account) => Some(&account.profile),
            _ => None,
        }
    }

    /// Apply the startup-check outcome. Only the first completion applies;
    /// anything that moved the state since dropping the result is a no-op.
    pub fn resolve(&mut self, started: u64, outcome: Option<Account>) -> bool {
        if self.epoch != started {
            return false;
        }
        self.phase = match outcome {
            Some(account) => SessionPhase::Authenticated(account),
            None => SessionPhase::Unauthenticated,
        };
        self.epoch += 1;
        true
    }

    /// Apply a successful login that started under `started`.
    pub fn login_succeeded(&mut self, started: u64, account: Account) -> bool {
        if self.epoch != started {
            return false;
        }
        self.phase = SessionPhase::Authenticated(account);
        self.epoch += 1;
        true
    }

    /// Clear the session after a logout attempt that started under
    /// `started`. Applied on success and failure alike: the user asked to
    /// leave, so the local session never outlives the request (fail-closed).
    pub fn logout_finished(&mut self, started: u64) -> bool {
        if self.epoch != started {
            return false;
        }
        self.phase = SessionPhase::Unauthenticated;
        self.epoch += 1;
        true
    }
}

/// Login input validated at construction: both fields must be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns a user-facing message when either field is empty.
    pub fn new(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() {
            return Err("Enter your email.");
        }
        if password.is_empty() {
            return Err("Enter your password.");
        }
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Injectable handle to the shared session state.
///
/// Provided once via context by the app root. Components read snapshots
/// reactively and call the operations below; nothing else writes the signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive snapshot of the current session state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    fn started_epoch(&self) -> u64 {
        self.state.with_untracked(SessionState::epoch)
    }

    /// Startup session check. Runs once per application lifetime; any
    /// failure silently resolves to logged-out (the failure itself is
    /// logged, never shown).
    pub async fn initialize(self) {
        let started = self.started_epoch();
        let outcome = auth::check_session().await.map(|resp| Account {
            kind: resp.user_type,
            profile: resp.user,
        });
        self.state.update(|s| {
            s.resolve(started, outcome);
        });
    }

    /// Log in under the given role. On success the session becomes
    /// authenticated and the raw response payload is returned to the caller.
    /// On failure the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Propagates the request failure, or a decode error when the response
    /// lacks the role's profile record.
    pub async fn login(
        self,
        credentials: &Credentials,
        kind: AccountKind,
    ) -> Result<serde_json::Value, ApiError> {
        let started = self.started_epoch();
        let payload = auth::login(credentials, kind).await?;
        let profile = auth::profile_from_login(kind, &payload).ok_or_else(|| {
            ApiError::Decode(format!(
                "login response missing `{}` record",
                kind.profile_field()
            ))
        })?;
        self.state.update(|s| {
            s.login_succeeded(started, Account { kind, profile });
        });
        Ok(payload)
    }

    /// Register a new account. Registration never logs the account in; the
    /// session state is untouched either way.
    ///
    /// # Errors
    ///
    /// Propagates the request failure.
    pub async fn register(form: &auth::RegisterForm) -> Result<serde_json::Value, ApiError> {
        auth::register(form).await
    }

    /// Log out of the given role. The local session is cleared even if the
    /// backend call fails; the error still propagates so the caller can
    /// report it.
    ///
    /// # Errors
    ///
    /// Propagates the request failure after clearing the local session.
    pub async fn logout(self, kind: AccountKind) -> Result<(), ApiError> {
        let started = self.started_epoch();
        let result = auth::logout(kind).await;
        self.state.update(|s| {
            s.logout_finished(started);
        });
        result
    }
}
