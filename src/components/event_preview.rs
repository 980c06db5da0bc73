//! Expanded preview card for a selected event.

use leptos::prelude::*;

use crate::net::types::{AccountKind, NearbyEvent};

/// Preview card with a per-event status message slot and a Join action.
///
/// Join only shows for volunteers, and disappears once the message reports
/// an existing registration.
#[component]
pub fn EventPreview(
    event: NearbyEvent,
    kind: Option<AccountKind>,
    message: Signal<Option<String>>,
    on_join: Callback<()>,
) -> impl IntoView {
    let NearbyEvent {
        name,
        description,
        date,
        ..
    } = event;

    let show_join = move || {
        kind == Some(AccountKind::Volunteer)
            && !message
                .get()
                .is_some_and(|m| m.to_lowercase().contains("already registered"))
    };

    view! {
        <div class="event-preview">
            <h3 class="event-preview__name">{name}</h3>
            <p class="event-preview__description">{description}</p>
            <p class="event-preview__date">{date}</p>
            <Show when=move || message.get().is_some()>
                <p class="event-preview__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <Show when=show_join>
                <button class="btn btn--primary" on:click=move |_| on_join.run(())>
                    "Join"
                </button>
            </Show>
        </div>
    }
}
