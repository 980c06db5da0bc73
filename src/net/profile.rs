//! Profile requests: fetch and multipart update, per role.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs.
//!
//! The backend is asymmetric here: volunteer fetches come back wrapped in a
//! `user` envelope while organization fetches return the bare record. That
//! asymmetry is absorbed in this module.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

#[cfg(feature = "hydrate")]
use super::config;
use super::error::ApiError;
use super::types::{AccountKind, ProfileRecord};

/// Fetch the full profile record for the given account.
///
/// # Errors
///
/// Returns the request failure.
pub async fn fetch_profile(kind: AccountKind, id: &str) -> Result<ProfileRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = super::http::get(&config::api_url(&kind.profile_path(id)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(super::error::from_response(resp).await);
        }
        match kind {
            AccountKind::Volunteer => {
                let envelope: super::types::VolunteerEnvelope = resp
                    .json()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(ProfileRecord::Volunteer(envelope.user))
            }
            AccountKind::Organization => {
                let record = resp
                    .json()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(ProfileRecord::Organization(record))
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kind, id);
        Err(ApiError::Unsupported)
    }
}

/// Role-specific editable profile fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileUpdateDetail {
    Volunteer { full_name: String },
    Organization { name: String, address: String },
}

impl ProfileUpdateDetail {
    pub fn kind(&self) -> AccountKind {
        match self {
            Self::Volunteer { .. } => AccountKind::Volunteer,
            Self::Organization { .. } => AccountKind::Organization,
        }
    }
}

/// Multipart profile-update payload.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileUpdate {
    pub description: String,
    pub detail: ProfileUpdateDetail,
    /// Replacement profile image, when the user picked a new one.
    #[cfg(feature = "hydrate")]
    pub image: Option<web_sys::File>,
}

impl ProfileUpdate {
    pub fn kind(&self) -> AccountKind {
        self.detail.kind()
    }

    /// Text fields in the backend's multipart naming.
    pub fn field_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("description", self.description.as_str())];
        match &self.detail {
            ProfileUpdateDetail::Volunteer { full_name } => {
                fields.push(("fullName", full_name));
            }
            ProfileUpdateDetail::Organization { name, address } => {
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

/// PUT the profile update to the role's endpoint.
///
/// # Errors
///
/// Returns the request failure.
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let data = update.form_data()?;
        let resp = super::http::put(&config::api_url(update.kind().update_profile_path()))
            .body(data)
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
        let _ = update;
        Err(ApiError::Unsupported)
    }
}
