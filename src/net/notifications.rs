//! Notification-service requests.
//!
//! The notification service is a separate microservice with its own base
//! URL. When an organization has no notifications it answers 200 with a
//! `{message}` object instead of an empty array; [`parse_notifications`]
//! absorbs that quirk.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

#[cfg(feature = "hydrate")]
use super::config;
use super::error::ApiError;
use super::types::Notification;

/// Path for an organization's notification list.
pub fn notifications_path(org_id: &str) -> String {
    format!("/notifications/{org_id}")
}

/// Interpret a notification-list body: an array of notifications, or the
/// service's `{message}` stand-in for "none".
///
/// # Errors
///
/// Returns a decode error for any other shape.
pub fn parse_notifications(payload: serde_json::Value) -> Result<Vec<Notification>, ApiError> {
    match payload {
        serde_json::Value::Array(_) => {
            serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
        }
        serde_json::Value::Object(map) if map.contains_key("message") => Ok(Vec::new()),
        _ => Err(ApiError::Decode("unexpected notification body".to_owned())),
    }
}

/// Fetch all notifications addressed to an organization.
///
/// # Errors
///
/// Returns the request failure.
pub async fn for_organization(org_id: &str) -> Result<Vec<Notification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&config::notif_url(&notifications_path(org_id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        let payload = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        parse_notifications(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = org_id;
        Err(ApiError::Unsupported)
    }
}
