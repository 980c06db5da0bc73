//! Shared failure type for service requests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for its operation; the client never retries.
//! Non-2xx responses carry the server's `error` field when the body has one,
//! so pages can show the server's own message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single request to the backend, the notification service, or
/// the geocoding provider.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with the server-provided `error` string if present.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Request issued outside a browser context.
    #[error("not available on server")]
    Unsupported,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build a status error from a non-2xx response body, picking up the
    /// `{error}` field when the body is JSON with one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        Self::Status { status, detail }
    }

    /// The server-provided error message, if there was one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Drain a non-2xx response into an [`ApiError`].
#[cfg(feature = "hydrate")]
pub(crate) async fn from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}
