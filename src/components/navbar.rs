//! Top navigation bar for authenticated screens.

use leptos::prelude::*;

use crate::net::types::AccountKind;
use crate::state::session::SessionStore;

/// Navigation links. Notifications and Create Event only show for
/// organization accounts; the bar reads the session and never mutates it.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let is_org = move || session.snapshot().account_kind() == Some(AccountKind::Organization);

    view! {
        <nav class="navbar">
            <div class="navbar__links">
                <a class="navbar__link" href="/map">"Map"</a>
                <Show when=is_org>
                    <a class="navbar__link" href="/notifications">"Notifications"</a>
                </Show>
                <a class="navbar__link" href="/profile">"Profile"</a>
                <a class="navbar__link" href="/events">"Events"</a>
                <Show when=is_org>
                    <a class="navbar__link" href="/create-event">"Create Event"</a>
                </Show>
            </div>
        </nav>
    }
}
