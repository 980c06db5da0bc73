//! Address lookup against the maps provider's geocoding endpoint.
//!
//! Only the tiny slice the client needs: one address in, one coordinate
//! pair out. `Ok(None)` means the provider did not recognize the address,
//! which callers treat as user error rather than a request failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geocode_test.rs"]
mod geocode_test;

#[cfg(feature = "hydrate")]
use super::config;
use super::error::ApiError;
use super::types::LatLng;

pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Pull the first result's coordinates out of a geocoding response.
/// `None` for any non-`OK` status or a response without a usable location.
pub fn parse_geocode(payload: &serde_json::Value) -> Option<LatLng> {
    if payload.get("status").and_then(|s| s.as_str()) != Some("OK") {
        return None;
    }
    let location = payload
        .get("results")?
        .get(0)?
        .get("geometry")?
        .get("location")?;
    Some(LatLng {
        lat: location.get("lat")?.as_f64()?,
        lng: location.get("lng")?.as_f64()?,
    })
}

/// Resolve an address to coordinates.
///
/// # Errors
///
/// Returns the request failure; an unrecognized address is `Ok(None)`.
pub async fn lookup(address: &str) -> Result<Option<LatLng>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(GEOCODE_URL)
            .query([("address", address), ("key", config::maps_key())])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(parse_geocode(&payload))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err(ApiError::Unsupported)
    }
}
