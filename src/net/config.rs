//! Build-time service configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment at runtime, so service
//! bases and the maps key are baked in at compile time and default to local
//! development values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the backend API.
pub fn api_base() -> &'static str {
    option_env!("VOLUNTREE_API_URL").unwrap_or("http://localhost:5000")
}

/// Base URL of the notification service.
pub fn notif_base() -> &'static str {
    option_env!("VOLUNTREE_NOTIF_URL").unwrap_or("http://localhost:5001")
}

/// API key for the geocoding provider.
pub fn maps_key() -> &'static str {
    option_env!("VOLUNTREE_MAPS_KEY").unwrap_or("")
}

/// Join a path onto the backend API base.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

/// Join a path onto the notification service base.
pub fn notif_url(path: &str) -> String {
    format!("{}{path}", notif_base())
}
