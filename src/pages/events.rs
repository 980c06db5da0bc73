//! Events page: the account's own events, split past/upcoming.

use leptos::prelude::*;

use crate::net::events;
use crate::net::types::{EventRef, MyEvents};
use crate::state::session::SessionStore;

#[component]
pub fn EventsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let view_upcoming = RwSignal::new(true);

    let my_events = LocalResource::new(move || {
        let kind = session.snapshot().account_kind();
        async move {
            match kind {
                Some(kind) => events::my_events(kind).await.map_err(|e| e.to_string()),
                None => Ok(MyEvents::default()),
            }
        }
    });

    let event_item = |event: &EventRef| {
        view! {
            <li class="events-page__item">
                <h3 class="events-page__item-name">{event.name.clone()}</h3>
                <p class="events-page__item-date">{event.date.clone()}</p>
            </li>
        }
    };

    view! {
        <div class="events-page">
            <div class="events-page__card">
                <h1 class="events-page__title">"Your Events"</h1>
                <div class="events-page__tabs">
                    <button
                        class="events-page__tab"
                        class=("events-page__tab--active", move || view_upcoming.get())
                        on:click=move |_| view_upcoming.set(true)
                    >
                        "Upcoming Events"
                    </button>
                    <button
                        class="events-page__tab"
                        class=("events-page__tab--active", move || !view_upcoming.get())
                        on:click=move |_| view_upcoming.set(false)
                    >
                        "Past Events"
                    </button>
                </div>
                <Suspense fallback=move || view! { <p class="events-page__status">"Loading..."</p> }>
                    {move || {
                        my_events.get().map(|result| match result {
                            Ok(events) => {
                                let shown = if view_upcoming.get() {
                                    events.upcoming_events
                                } else {
                                    events.past_events
                                };
                                if shown.is_empty() {
                                    view! { <p class="events-page__status">"No events found."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="events-page__list">
                                            {shown.iter().map(event_item).collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(_) => view! {
                                <p class="events-page__error">
                                    "An unexpected error occurred while fetching events."
                                </p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
