//! Create-event page for organizations.
//!
//! The address is geocoded before the event is submitted; an address the
//! provider does not recognize is a user-facing error, not a request
//! failure.

#[cfg(test)]
#[path = "create_event_test.rs"]
mod create_event_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::NewEvent;

/// Validate the raw form fields; every field is required.
fn validate_event_input(
    name: &str,
    description: &str,
    date: &str,
    address: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Enter an event name.");
    }
    if description.trim().is_empty() {
        return Err("Enter a description.");
    }
    if date.trim().is_empty() {
        return Err("Pick a date.");
    }
    if address.trim().is_empty() {
        return Err("Enter an address.");
    }
    Ok(())
}

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        if let Err(message) = validate_event_input(
            &name.get(),
            &description.get(),
            &date.get(),
            &address.get(),
        ) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let event_address = address.get_untracked().trim().to_owned();
            let coordinates = match crate::net::geocode::lookup(&event_address).await {
                Ok(Some(coordinates)) => coordinates,
                Ok(None) => {
                    error.set("Invalid address. Please try again.".to_owned());
                    busy.set(false);
                    return;
                }
                Err(_) => {
                    error.set("Error validating address. Please try again.".to_owned());
                    busy.set(false);
                    return;
                }
            };

            let event = NewEvent {
                name: name.get_untracked().trim().to_owned(),
                description: description.get_untracked().trim().to_owned(),
                date: date.get_untracked(),
                address: event_address,
                lat: coordinates.lat,
                lng: coordinates.lng,
            };
            match crate::net::events::create_event(&event).await {
                Ok(created) => {
                    success.set(created.message);
                    name.set(String::new());
                    description.set(String::new());
                    date.set(String::new());
                    address.set(String::new());
                }
                Err(e) => {
                    let message = e
                        .detail()
                        .unwrap_or("Failed to create event. Please try again.")
                        .to_owned();
                    error.set(message);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    view! {
        <div class="create-event-page">
            <h1 class="create-event-page__title">"Create Event"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="create-event-page__error">{move || error.get()}</p>
            </Show>
            <Show when=move || !success.get().is_empty()>
                <p class="create-event-page__success">{move || success.get()}</p>
            </Show>
            <form class="create-event-form" on:submit=on_submit>
                <label class="create-event-form__label" for="name">"Event Name"</label>
                <input
                    id="name"
                    class="auth-input"
                    type="text"
                    placeholder="Enter event name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />

                <label class="create-event-form__label" for="description">"Description"</label>
                <textarea
                    id="description"
                    class="auth-input auth-input--area"
                    placeholder="Enter event description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>

                <label class="create-event-form__label" for="date">"Date"</label>
                <input
                    id="date"
                    class="auth-input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />

                <label class="create-event-form__label" for="address">"Address"</label>
                <input
                    id="address"
                    class="auth-input"
                    type="text"
                    placeholder="Enter event address"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />

                <button class="btn btn--primary create-event-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating Event..." } else { "Create Event" }}
                </button>
            </form>
        </div>
    }
}
