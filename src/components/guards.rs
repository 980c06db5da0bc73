//! Route-guard components gating navigation on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! UX-only guards: they redirect based on the client's view of the session,
//! while the backend still validates every request. Both guards render a
//! neutral placeholder until the startup session check resolves, and they
//! only ever read the store.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionStore;
use crate::util::guard::{GuardDecision, protected_decision, restricted_decision};

fn render(decision: GuardDecision, children: &ChildrenFn) -> AnyView {
    match decision {
        GuardDecision::Wait => view! {
            <div class="route-guard__loading">"Loading..."</div>
        }
        .into_any(),
        GuardDecision::Allow => children(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Renders children only for authenticated sessions; once the session
/// resolves, unauthenticated visitors are sent to the login screen.
#[component]
pub fn ProtectedRoutes(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || render(protected_decision(&session.snapshot()), &children)
}

/// Renders children (login/register) only while unauthenticated; signed-in
/// accounts are sent to the authenticated landing route.
#[component]
pub fn RestrictedRoutes(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    move || render(restricted_decision(&session.snapshot()), &children)
}
