//! Profile page: role-specific fields, image, edit and logout actions.

use leptos::prelude::*;

use crate::net::profile;
use crate::net::types::ProfileRecord;
use crate::state::session::SessionStore;

fn profile_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p class="profile-page__row">
            <strong>{label}</strong>
            {value}
        </p>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let record = LocalResource::new(move || {
        let snapshot = session.snapshot();
        let kind = snapshot.account_kind();
        let id = snapshot.profile().map(|p| p.id.clone());
        async move {
            match (kind, id) {
                (Some(kind), Some(id)) => profile::fetch_profile(kind, &id)
                    .await
                    .map(Some)
                    .map_err(|e| e.to_string()),
                _ => Ok(None),
            }
        }
    });

    let on_logout = move |_| {
        let Some(kind) = session.snapshot().account_kind() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Logout clears the local session either way; the guard then
            // routes back to the login screen.
            if let Err(e) = session.logout(kind).await {
                log::warn!("logout request failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kind;
        }
    };

    let rendered_record = |record: &ProfileRecord| match record {
        ProfileRecord::Volunteer(v) => view! {
            <div class="profile-page__fields">
                {profile_row("Email: ", v.email.clone())}
                {profile_row("Full Name: ", v.full_name.clone())}
                {profile_row("Date of Birth: ", v.dob.clone())}
                {profile_row("Description: ", v.description.clone())}
            </div>
        }
        .into_any(),
        ProfileRecord::Organization(o) => view! {
            <div class="profile-page__fields">
                {profile_row("Name: ", o.name.clone())}
                {profile_row("Email: ", o.email.clone())}
                {profile_row("Address: ", o.address.clone())}
                {profile_row("Description: ", o.description.clone())}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="profile-page">
            <div class="profile-page__card">
                <h1 class="profile-page__title">"Profile"</h1>
                <Suspense fallback=move || view! { <p class="profile-page__status">"Loading..."</p> }>
                    {move || {
                        record.get().map(|result| match result {
                            Ok(Some(record)) => {
                                let image = (!record.image().is_empty()).then(|| {
                                    format!("data:image/jpeg;base64,{}", record.image())
                                });
                                view! {
                                    <div>
                                        {image.map(|src| view! {
                                            <img class="profile-page__image" src=src alt="Profile"/>
                                        })}
                                        {rendered_record(&record)}
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(None) => ().into_any(),
                            Err(_) => view! {
                                <p class="profile-page__error">
                                    "Failed to load profile. Please try again."
                                </p>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
                <a class="btn profile-page__edit" href="/edit-profile">"Edit Profile"</a>
                <button class="btn btn--danger profile-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
