//! Registration page for both roles, with optional profile image upload.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::auth::{RegisterDetail, RegisterForm};
use crate::net::types::AccountKind;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Raw register-form field values as typed by the user.
#[derive(Clone, Debug, Default)]
struct RegisterFields {
    kind: AccountKind,
    email: String,
    password: String,
    confirm: String,
    description: String,
    full_name: String,
    dob: String,
    organization_name: String,
    address: String,
}

/// Assemble the signup form, enforcing the password confirmation and the
/// role-specific required fields.
fn build_register_form(fields: &RegisterFields) -> Result<RegisterForm, &'static str> {
    let email = fields.email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if fields.password.is_empty() {
        return Err("Enter a password.");
    }
    if fields.password != fields.confirm {
        return Err("Passwords do not match.");
    }
    let detail = match fields.kind {
        AccountKind::Volunteer => {
            let full_name = fields.full_name.trim();
            if full_name.is_empty() {
                return Err("Enter your full name.");
            }
            RegisterDetail::Volunteer {
                full_name: full_name.to_owned(),
                dob: fields.dob.trim().to_owned(),
            }
        }
        AccountKind::Organization => {
            let name = fields.organization_name.trim();
            if name.is_empty() {
                return Err("Enter your organization's name.");
            }
            RegisterDetail::Organization {
                name: name.to_owned(),
                address: fields.address.trim().to_owned(),
            }
        }
    };
    Ok(RegisterForm {
        email: email.to_owned(),
        password: fields.password.clone(),
        description: fields.description.trim().to_owned(),
        detail,
        #[cfg(feature = "hydrate")]
        image: None,
    })
}

/// Registration page. A successful signup navigates to the login screen;
/// registering never logs the account in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let fields = RwSignal::new(RegisterFields::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let preview = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let image = RwSignal::new_local(None::<web_sys::File>);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let is_volunteer = move || fields.with(|f| f.kind == AccountKind::Volunteer);

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
        if busy.get() {
            return;
        }
        let form = match fields.with(build_register_form) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let mut form = form;
            form.image = image.get();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match SessionStore::register(&form).await {
                    Ok(_) => navigate("/login", NavigateOptions::default()),
                    Err(e) => {
                        let message = e
                            .detail()
                            .unwrap_or("An error occurred. Please try again.")
                            .to_owned();
                        error.set(message);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h2 class="auth-card__title">"Sign up"</h2>
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

                    <fieldset class="auth-form__roles">
                        <legend class="auth-form__label">"Sign up as"</legend>
                        <label class="auth-form__role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=is_volunteer
                                on:change=move |_| fields.update(|f| f.kind = AccountKind::Volunteer)
                            />
                            "Volunteer"
                        </label>
                        <label class="auth-form__role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || !is_volunteer()
                                on:change=move |_| fields.update(|f| f.kind = AccountKind::Organization)
                            />
                            "Organization"
                        </label>
                    </fieldset>

                    <label class="auth-form__label" for="email">"Enter your email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="example@mail.com"
                        prop:value=move || fields.with(|f| f.email.clone())
                        on:input=move |ev| fields.update(|f| f.email = event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">"Enter your password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || fields.with(|f| f.password.clone())
                        on:input=move |ev| fields.update(|f| f.password = event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="confirm">"Confirm your password"</label>
                    <input
                        id="confirm"
                        class="auth-input"
                        type="password"
                        placeholder="Confirm Password"
                        prop:value=move || fields.with(|f| f.confirm.clone())
                        on:input=move |ev| fields.update(|f| f.confirm = event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="auth-input auth-input--area"
                        placeholder=move || {
                            if is_volunteer() { "Describe yourself" } else { "Describe your organization" }
                        }
                        prop:value=move || fields.with(|f| f.description.clone())
                        on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
                    ></textarea>

                    <Show when=is_volunteer>
                        <label class="auth-form__label" for="full-name">"Full Name"</label>
                        <input
                            id="full-name"
                            class="auth-input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || fields.with(|f| f.full_name.clone())
                            on:input=move |ev| fields.update(|f| f.full_name = event_target_value(&ev))
                        />
                        <label class="auth-form__label" for="dob">"Date of Birth"</label>
                        <input
                            id="dob"
                            class="auth-input"
                            type="date"
                            prop:value=move || fields.with(|f| f.dob.clone())
                            on:input=move |ev| fields.update(|f| f.dob = event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || !is_volunteer()>
                        <label class="auth-form__label" for="org-name">"Organization Name"</label>
                        <input
                            id="org-name"
                            class="auth-input"
                            type="text"
                            placeholder="Your organization's name"
                            prop:value=move || fields.with(|f| f.organization_name.clone())
                            on:input=move |ev| {
                                fields.update(|f| f.organization_name = event_target_value(&ev));
                            }
                        />
                        <label class="auth-form__label" for="address">"Address"</label>
                        <input
                            id="address"
                            class="auth-input"
                            type="text"
                            placeholder="Enter your organization's address"
                            prop:value=move || fields.with(|f| f.address.clone())
                            on:input=move |ev| fields.update(|f| f.address = event_target_value(&ev))
                        />
                    </Show>

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
