//! Edit-profile page: seeds the form from the current record, PUTs a
//! multipart update, and returns to the profile on success.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::profile::{self, ProfileUpdate, ProfileUpdateDetail};
use crate::net::types::{AccountKind, ProfileRecord};
use crate::state::session::SessionStore;

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let description = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let organization_name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let image = RwSignal::new_local(None::<web_sys::File>);
    let error = RwSignal::new(String::new());
    let seeded = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let is_volunteer =
        move || session.snapshot().account_kind() == Some(AccountKind::Volunteer);

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

    // Seed the form once the current record arrives; later refetches must
    // not clobber in-progress edits.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(Ok(Some(current))) = record.get() {
            match &current {
                ProfileRecord::Volunteer(v) => {
                    description.set(v.description.clone());
                    full_name.set(v.full_name.clone());
                }
                ProfileRecord::Organization(o) => {
                    description.set(o.description.clone());
                    organization_name.set(o.name.clone());
                    address.set(o.address.clone());
                }
            }
            if !current.image().is_empty() {
                preview.set(Some(format!(
                    "data:image/jpeg;base64,{}",
                    current.image()
                )));
            }
            seeded.set(true);
        }
    });

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|list| list.get(0));
            if let Some(file) = &file {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(file) {
                    preview.set(Some(url));
                }
            }
            image.set(file);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(kind) = session.snapshot().account_kind() else {
            return;
        };
        let detail = match kind {
            AccountKind::Volunteer => ProfileUpdateDetail::Volunteer {
                full_name: full_name.get().trim().to_owned(),
            },
            AccountKind::Organization => ProfileUpdateDetail::Organization {
                name: organization_name.get().trim().to_owned(),
                address: address.get().trim().to_owned(),
            },
        };
        let update = ProfileUpdate {
            description: description.get().trim().to_owned(),
            detail,
            #[cfg(feature = "hydrate")]
            image: image.get(),
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match profile::update_profile(&update).await {
                    Ok(()) => navigate("/profile", NavigateOptions::default()),
                    Err(_) => {
                        error.set("Failed to update profile. Please try again.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h2 class="auth-card__title">"Edit Profile"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__avatar" for="image">
                        <Show
                            when=move || preview.get().is_some()
                            fallback=|| view! { <span class="auth-form__avatar-hint">"Upload Image"</span> }
                        >
                            <img
                                class="auth-form__avatar-preview"
                                src=move || preview.get().unwrap_or_default()
                                alt="Profile preview"
                            />
                        </Show>
                        <input
                            id="image"
                            class="auth-form__file"
                            type="file"
                            accept="image/*"
                            on:change=on_image_change
                        />
                    </label>

                    <label class="auth-form__label" for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="auth-input auth-input--area"
                        placeholder=move || {
                            if is_volunteer() { "Describe yourself" } else { "Describe your organization" }
                        }
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>

                    <Show when=is_volunteer>
                        <label class="auth-form__label" for="full-name">"Full Name"</label>
                        <input
                            id="full-name"
                            class="auth-input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || !is_volunteer()>
                        <label class="auth-form__label" for="org-name">"Organization Name"</label>
                        <input
                            id="org-name"
                            class="auth-input"
                            type="text"
                            placeholder="Your organization's name"
                            prop:value=move || organization_name.get()
                            on:input=move |ev| organization_name.set(event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="address">"Address"</label>
                        <input
                            id="address"
                            class="auth-input"
                            type="text"
                            placeholder="Enter your address"
                            prop:value=move || address.get()
                            on:input=move |ev| address.set(event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit">
                        "Save Changes"
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href="/profile">"Back to Profile"</a>
                </p>
            </div>
        </div>
    }
}
