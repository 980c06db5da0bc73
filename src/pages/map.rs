//! Map page: events near the device location.
//!
//! The map widget itself stays out of this crate; nearby events render as a
//! selectable list with a preview panel, driven by one geolocation fix and
//! one nearest-events fetch.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::event_preview::EventPreview;
use crate::net::events;
use crate::net::types::NearbyEvent;
use crate::state::session::SessionStore;
use crate::util::geolocation;

#[component]
pub fn MapPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let selected = RwSignal::new(None::<NearbyEvent>);
    // Join outcomes per event id, so reopening a preview keeps its message.
    let join_messages = RwSignal::new(HashMap::<String, String>::new());

    let nearby = LocalResource::new(|| async {
        let position = geolocation::current_position().await?;
        events::nearest_events(position.lat, position.lng)
            .await
            .map_err(|e| e.to_string())
    });

    let on_join = Callback::new(move |event_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match events::join_event(&event_id).await {
                Ok(message) => message,
                Err(e) => e
                    .detail()
                    .unwrap_or("Failed to join the event. Please try again.")
                    .to_owned(),
            };
            join_messages.update(|m| {
                m.insert(event_id, outcome);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event_id;
        }
    });

    view! {
        <div class="map-page">
            <div class="map-page__list-panel">
                <h1 class="map-page__title">"Events Near You"</h1>
                <Suspense fallback=move || view! { <p class="map-page__status">"Locating nearby events..."</p> }>
                    {move || {
                        nearby.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="map-page__status">"No events found nearby."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="map-page__list">
                                        {list
                                            .into_iter()
                                            .map(|event| {
                                                let entry = event.clone();
                                                let distance = event
                                                    .distance
                                                    .map(|d| format!("{d:.1} mi"))
                                                    .unwrap_or_default();
                                                view! {
                                                    <li
                                                        class="map-page__item"
                                                        on:click=move |_| selected.set(Some(entry.clone()))
                                                    >
                                                        <span class="map-page__item-name">{event.name.clone()}</span>
                                                        <span class="map-page__item-date">{event.date.clone()}</span>
                                                        <span class="map-page__item-distance">{distance}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(message) => {
                                view! { <p class="map-page__error">{message}</p> }.into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
            <div class="map-page__preview-panel">
                {move || {
                    selected.get().map(|event| {
                        let id = event.id.clone();
                        let message = Signal::derive(move || join_messages.get().get(&id).cloned());
                        let join_id = event.id.clone();
                        view! {
                            <EventPreview
                                event=event
                                kind=session.snapshot().account_kind()
                                message=message
                                on_join=Callback::new(move |()| on_join.run(join_id.clone()))
                            />
                        }
                    })
                }}
            </div>
        </div>
    }
}
