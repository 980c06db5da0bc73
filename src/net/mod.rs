//! Networking modules for the backend API and sibling services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth`, `events`, `profile`, and `notifications` wrap the external HTTP
//! services; `geocode` talks to the maps provider; `types` defines the wire
//! schema and `error` the shared failure type. All request functions are
//! real `gloo-net` calls under the `hydrate` feature and stubs on the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod events;
pub mod geocode;
pub mod notifications;
pub mod profile;
pub mod types;

/// Request builders with the session cookie included, shared by every
/// backend call.
#[cfg(feature = "hydrate")]
pub(crate) mod http {
    use gloo_net::http::{Request, RequestBuilder};
    use web_sys::RequestCredentials;

    pub fn get(url: &str) -> RequestBuilder {
        Request::get(url).credentials(RequestCredentials::Include)
    }

    pub fn post(url: &str) -> RequestBuilder {
        Request::post(url).credentials(RequestCredentials::Include)
    }

    pub fn put(url: &str) -> RequestBuilder {
        Request::put(url).credentials(RequestCredentials::Include)
    }
}
