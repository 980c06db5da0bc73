//! Event requests: discovery, the account's own events, creation, joining.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs, since event data only renders in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

#[cfg(feature = "hydrate")]
use super::config;
use super::error::ApiError;
use super::types::{AccountKind, CreatedEvent, MyEvents, NearbyEvent, NewEvent};

pub const NEAREST_EVENTS_PATH: &str = "/volunteering/nearest-events";
pub const CREATE_EVENT_PATH: &str = "/volunteering/create-event";

/// Path for registering the current volunteer onto an event.
pub fn join_event_path(event_id: &str) -> String {
    format!("/volunteering/register-for-event/{event_id}/register")
}

/// Fetch events around a coordinate, sorted nearest first.
///
/// # Errors
///
/// Returns the request failure.
pub async fn nearest_events(lat: f64, lng: f64) -> Result<Vec<NearbyEvent>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let lat = lat.to_string();
        let lng = lng.to_string();
        let resp = super::http::get(&config::api_url(NEAREST_EVENTS_PATH))
            .query([("lat", lat.as_str()), ("lng", lng.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lat, lng);
        Err(ApiError::Unsupported)
    }
}

/// Fetch the account's own events, split into past and upcoming.
///
/// # Errors
///
/// Returns the request failure.
pub async fn my_events(kind: AccountKind) -> Result<MyEvents, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&config::api_url(kind.my_events_path()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        Err(ApiError::Unsupported)
    }
}

/// Register the current volunteer for an event, returning the server's
/// confirmation message.
///
/// # Errors
///
/// Returns the request failure; "already registered" comes back as a status
/// error with the server's message as its detail.
pub async fn join_event(event_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post(&config::api_url(&join_event_path(event_id)))
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        let body: super::types::Ack = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event_id;
        Err(ApiError::Unsupported)
    }
}

/// Create an event under the current organization.
///
/// # Errors
///
/// Returns the request failure.
pub async fn create_event(event: &NewEvent) -> Result<CreatedEvent, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post(&config::api_url(CREATE_EVENT_PATH))
            .json(event)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
        Err(ApiError::Unsupported)
    }
}
