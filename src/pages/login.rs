//! Login page with role selection.

use leptos::prelude::*;

use crate::net::types::AccountKind;
use crate::state::session::{Credentials, SessionStore};

/// Login page: role radio, email, password. A successful login flips the
/// session to authenticated and the restricted guard redirects to the map.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let kind = RwSignal::new(AccountKind::Volunteer);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match Credentials::new(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let selected = kind.get();
            leptos::task::spawn_local(async move {
                if session.login(&credentials, selected).await.is_err() {
                    error.set("Login failed. Please try again.".to_owned());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Log In"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <fieldset class="auth-form__roles">
                        <legend class="auth-form__label">"Log in as"</legend>
                        <label class="auth-form__role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || kind.get() == AccountKind::Volunteer
                                on:change=move |_| kind.set(AccountKind::Volunteer)
                            />
                            "Volunteer"
                        </label>
                        <label class="auth-form__role">
                            <input
                                type="radio"
                                name="role"
                                prop:checked=move || kind.get() == AccountKind::Organization
                                on:change=move |_| kind.set(AccountKind::Organization)
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
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />

                    <label class="auth-form__label" for="password">"Enter your password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />

                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign up here"</a>
                </p>
            </div>
        </div>
    }
}
