//! Wire DTOs for the backend API, notification service, and geocoder.
//!
//! DESIGN
//! ======
//! These types mirror the server payloads so serde stays lossless. Role
//! selection is centralized on [`AccountKind`]: every role-specific endpoint
//! or payload field comes from a method here, never from branch logic at
//! call sites.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role an account is registered and authenticated under.
///
/// The backend has no unified auth routes; each logical operation exists
/// once per role. The path methods below are the single place that mapping
/// lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    #[default]
    Volunteer,
    Organization,
}

impl AccountKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Organization => "organization",
        }
    }

    pub fn login_path(self) -> &'static str {
        match self {
            Self::Volunteer => "/users/login",
            Self::Organization => "/organizations/login",
        }
    }

    pub fn signup_path(self) -> &'static str {
        match self {
            Self::Volunteer => "/users/signup",
            Self::Organization => "/organizations/signup",
        }
    }

    pub fn logout_path(self) -> &'static str {
        match self {
            Self::Volunteer => "/users/logout",
            Self::Organization => "/organizations/logout",
        }
    }

    pub fn my_events_path(self) -> &'static str {
        match self {
            Self::Volunteer => "/users/get_my_events",
            Self::Organization => "/organizations/get_my_events",
        }
    }

    pub fn profile_path(self, id: &str) -> String {
        match self {
            Self::Volunteer => format!("/users/get_user_by_id/{id}"),
            Self::Organization => format!("/organizations/get_org_by_id/{id}"),
        }
    }

    pub fn update_profile_path(self) -> &'static str {
        match self {
            Self::Volunteer => "/users/update_profile",
            Self::Organization => "/organizations/update_org",
        }
    }

    /// The field a login response carries the profile record under.
    pub fn profile_field(self) -> &'static str {
        match self {
            Self::Volunteer => "user",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity's server record: an id plus whatever profile
/// fields the server includes. Kept opaque beyond the id; pages that need
/// full profile data fetch it separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Successful body of the startup session check.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionCheckResponse {
    #[serde(rename = "userType")]
    pub user_type: AccountKind,
    pub user: AccountProfile,
}

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// An event near a coordinate, as returned by the nearest-events endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NearbyEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub lat: f64,
    pub lng: f64,
    /// Distance from the query point in miles; sorted ascending server-side.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// A lightweight event reference stored on the account record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct EventRef {
    pub id: String,
    pub name: String,
    pub date: String,
}

/// The account's events split around the current date.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MyEvents {
    #[serde(default)]
    pub past_events: Vec<EventRef>,
    #[serde(default)]
    pub upcoming_events: Vec<EventRef>,
}

/// Payload for creating an event, coordinates already resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Acknowledgement of a created event.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedEvent {
    pub message: String,
    pub event_id: String,
}

/// Generic `{message}` acknowledgement body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// A volunteer profile record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct VolunteerProfile {
    pub id: String,
    pub email: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub description: String,
    /// Base64-encoded profile image; empty when none was uploaded.
    #[serde(default)]
    pub image: String,
}

/// An organization profile record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct OrganizationProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

/// Either role's profile record, unified for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileRecord {
    Volunteer(VolunteerProfile),
    Organization(OrganizationProfile),
}

impl ProfileRecord {
    /// Base64 image payload, if the record has one.
    pub fn image(&self) -> &str {
        match self {
            Self::Volunteer(v) => &v.image,
            Self::Organization(o) => &o.image,
        }
    }
}

/// Volunteer profile fetches come back wrapped in a `user` envelope;
/// organization fetches return the bare record.
#[derive(Clone, Debug, Deserialize)]
pub struct VolunteerEnvelope {
    pub user: VolunteerProfile,
}

/// A notification delivered to an organization.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub message: String,
    pub status: String,
}
