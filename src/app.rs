//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::guards::{ProtectedRoutes, RestrictedRoutes};
use crate::components::navbar::Navbar;
use crate::pages::create_event::CreateEventPage;
use crate::pages::edit_profile::EditProfilePage;
use crate::pages::events::EventsPage;
use crate::pages::login::LoginPage;
use crate::pages::map::MapPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionStore;
use crate::util::guard::{HOME_ROUTE, LOGIN_ROUTE};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context, kicks off the one-shot startup
/// session check, and sets up client-side routing behind the route guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);

    // The startup check runs exactly once per application lifetime; guards
    // hold their loading placeholder until it resolves.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.initialize().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/voluntree.css"/>
        <Title text="Voluntree"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_ROUTE/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <RestrictedRoutes><LoginPage/></RestrictedRoutes> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <RestrictedRoutes><RegisterPage/></RestrictedRoutes> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoutes><Redirect path=HOME_ROUTE/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("map")
                    view=|| view! { <ProtectedRoutes><Navbar/><MapPage/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("events")
                    view=|| view! { <ProtectedRoutes><Navbar/><EventsPage/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("create-event")
                    view=|| view! { <ProtectedRoutes><Navbar/><CreateEventPage/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("notifications")
                    view=|| view! { <ProtectedRoutes><Navbar/><NotificationsPage/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <ProtectedRoutes><Navbar/><ProfilePage/></ProtectedRoutes> }
                />
                <Route
                    path=StaticSegment("edit-profile")
                    view=|| view! { <ProtectedRoutes><EditProfilePage/></ProtectedRoutes> }
                />
            </Routes>
        </Router>
    }
}
