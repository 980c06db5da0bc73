//! Authentication requests: session check, login, signup, logout.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the session
//! cookie included. Server-side (SSR): stubs, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The startup session check degrades to `None` on any failure so the app
//! silently falls back to logged-out; the remaining operations propagate
//! [`ApiError`] to the calling page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[cfg(feature = "hydrate")]
use super::config;
use super::error::ApiError;
use super::types::{AccountKind, AccountProfile, SessionCheckResponse};
use crate::state::session::Credentials;

/// Role-less session check endpoint; the role comes back in the response.
pub const SESSION_CHECK_PATH: &str = "/users/auth";

/// Ask the backend whether the cookie session is still valid.
///
/// Returns `None` on any failure (non-200, network error, malformed body);
/// the failure is logged and the caller treats it as logged out.
pub async fn check_session() -> Option<SessionCheckResponse> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match super::http::get(&config::api_url(SESSION_CHECK_PATH))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session check failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("session check rejected: status {}", resp.status());
            return None;
        }
        match resp.json::<SessionCheckResponse>().await {
            Ok(body) => Some(body),
            Err(e) => {
                log::warn!("session check returned malformed body: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// POST credentials to the role's login endpoint, returning the raw
/// response payload.
///
/// # Errors
///
/// Returns the request failure; the caller decides what to show.
pub async fn login(
    credentials: &Credentials,
    kind: AccountKind,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": credentials.email(),
            "password": credentials.password(),
        });
        let resp = super::http::post(&config::api_url(kind.login_path()))
            .json(&payload)
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
        let _ = (credentials, kind);
        Err(ApiError::Unsupported)
    }
}

/// Extract the role-specific profile record from a login payload.
///
/// Volunteers come back under `user`, organizations under `organization`;
/// anything else means the payload is not a usable login response.
pub fn profile_from_login(
    kind: AccountKind,
    payload: &serde_json::Value,
) -> Option<AccountProfile> {
    let record = payload.get(kind.profile_field())?;
    serde_json::from_value(record.clone()).ok()
}

/// Role-specific signup fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterDetail {
    Volunteer { full_name: String, dob: String },
    Organization { name: String, address: String },
}

impl RegisterDetail {
    pub fn kind(&self) -> AccountKind {
        match self {
            Self::Volunteer { .. } => AccountKind::Volunteer,
            Self::Organization { .. } => AccountKind::Organization,
        }
    }
}

/// Multipart signup payload; the detail variant decides the role and which
/// extra fields apply.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub description: String,
    pub detail: RegisterDetail,
    /// Optional profile image attached as a multipart file part.
    #[cfg(feature = "hydrate")]
    pub image: Option<web_sys::File>,
}

impl RegisterForm {
    pub fn kind(&self) -> AccountKind {
        self.detail.kind()
    }

    /// Text fields in the backend's multipart naming.
    pub fn field_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("description", self.description.as_str()),
        ];
        match &self.detail {
            RegisterDetail::Volunteer { full_name, dob } => {
                fields.push(("fullName", full_name));
                fields.push(("dob", dob));
            }
            RegisterDetail::Organization { name, address } => {
                fields.push(("name", name));
                fields.push(("address", address));
            }
        }
        fields
    }

    #[cfg(feature = "hydrate")]
    fn form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
        for (name, value) in self.field_pairs() {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
        }
        if let Some(image) = &self.image {
            form.append_with_blob_and_filename("image", image, &image.name())
                .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
        }
        Ok(form)
    }
}

/// POST the signup form to the role's endpoint. The payload is forwarded
/// as-is; a successful signup does not create a session.
///
/// # Errors
///
/// Returns the request failure; the caller decides what to show.
pub async fn register(form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let data = form.form_data()?;
        let resp = super::http::post(&config::api_url(form.kind().signup_path()))
            .body(data)
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
        let _ = form;
        Err(ApiError::Unsupported)
    }
}

/// POST to the role's logout endpoint.
///
/// # Errors
///
/// Returns the request failure; the session store clears local state either
/// way.
pub async fn logout(kind: AccountKind) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::post(&config::api_url(kind.logout_path()))
            .json(&serde_json::json!({}))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(super::error::from_response(resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = kind;
        Err(ApiError::Unsupported)
    }
}
