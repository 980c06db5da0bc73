//! Notifications page for organization accounts.

use leptos::prelude::*;

use crate::net::notifications;
use crate::state::session::SessionStore;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let items = LocalResource::new(move || {
        let id = session.snapshot().profile().map(|p| p.id.clone());
        async move {
            match id {
                Some(id) => notifications::for_organization(&id)
                    .await
                    .map_err(|e| e.to_string()),
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <div class="notifications-page">
            <div class="notifications-page__card">
                <h1 class="notifications-page__title">"Notifications"</h1>
                <Suspense fallback=move || view! { <p class="notifications-page__status">"Loading..."</p> }>
                    {move || {
                        items.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <p class="notifications-page__status">"No notifications available."</p>
                                }
                                    .into_any()
                            }
                            Ok(list) => view! {
                                <ul class="notifications-page__list">
                                    {list
                                        .into_iter()
                                        .map(|notification| {
                                            view! {
                                                <li class="notifications-page__item">
                                                    <p class="notifications-page__message">
                                                        {notification.message}
                                                    </p>
                                                    <p class="notifications-page__item-status">
                                                        "Status: " {notification.status}
                                                    </p>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any(),
                            Err(_) => view! {
                                <p class="notifications-page__error">
                                    "Failed to fetch notifications. Please try again."
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
