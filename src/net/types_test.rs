use super::*;

// =============================================================
// AccountKind endpoint selection
// =============================================================

#[test]
fn volunteer_paths_use_users_routes() {
    let kind = AccountKind::Volunteer;
    assert_eq!(kind.login_path(), "/users/login");
    assert_eq!(kind.signup_path(), "/users/signup");
    assert_eq!(kind.logout_path(), "/users/logout");
    assert_eq!(kind.my_events_path(), "/users/get_my_events");
    assert_eq!(kind.profile_path("u1"), "/users/get_user_by_id/u1");
    assert_eq!(kind.update_profile_path(), "/users/update_profile");
}

#[test]
fn organization_paths_use_organizations_routes() {
    let kind = AccountKind::Organization;
    assert_eq!(kind.login_path(), "/organizations/login");
    assert_eq!(kind.signup_path(), "/organizations/signup");
    assert_eq!(kind.logout_path(), "/organizations/logout");
    assert_eq!(kind.my_events_path(), "/organizations/get_my_events");
    assert_eq!(kind.profile_path("o9"), "/organizations/get_org_by_id/o9");
    assert_eq!(kind.update_profile_path(), "/organizations/update_org");
}

#[test]
fn profile_field_matches_login_response_shape() {
    assert_eq!(AccountKind::Volunteer.profile_field(), "user");
    assert_eq!(AccountKind::Organization.profile_field(), "organization");
}

#[test]
fn account_kind_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&AccountKind::Volunteer).unwrap(),
        r#""volunteer""#
    );
    assert_eq!(
        serde_json::from_str::<AccountKind>(r#""organization""#).unwrap(),
        AccountKind::Organization
    );
}

// =============================================================
// Session check body
// =============================================================

#[test]
fn session_check_response_parses_user_type_and_record() {
    let body = serde_json::json!({
        "msg": "Authenticated",
        "userType": "organization",
        "user": { "id": "o1", "email": "org@example.com", "userType": "organization" }
    });
    let parsed: SessionCheckResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.user_type, AccountKind::Organization);
    assert_eq!(parsed.user.id, "o1");
    assert_eq!(
        parsed.user.extra.get("email").and_then(|v| v.as_str()),
        Some("org@example.com")
    );
}

// =============================================================
// Event DTOs
// =============================================================

#[test]
fn nearby_event_parses_with_and_without_distance() {
    let with: NearbyEvent = serde_json::from_value(serde_json::json!({
        "id": "e1", "name": "Cleanup", "description": "Park cleanup",
        "date": "2026-09-01", "lat": 40.7, "lng": -74.0, "distance": 1.25
    }))
    .unwrap();
    assert_eq!(with.distance, Some(1.25));

    let without: NearbyEvent = serde_json::from_value(serde_json::json!({
        "id": "e2", "name": "Food drive", "description": "Cans",
        "date": "2026-09-02", "lat": 40.8, "lng": -74.1
    }))
    .unwrap();
    assert_eq!(without.distance, None);
}

#[test]
fn my_events_defaults_missing_lists_to_empty() {
    let parsed: MyEvents = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(parsed.past_events.is_empty());
    assert!(parsed.upcoming_events.is_empty());
}

// =============================================================
// Profile DTOs
// =============================================================

#[test]
fn volunteer_profile_parses_camel_case_full_name() {
    let parsed: VolunteerProfile = serde_json::from_value(serde_json::json!({
        "id": "u1", "email": "a@b.com", "fullName": "Ada Lovelace",
        "dob": "1815-12-10", "description": "", "image": ""
    }))
    .unwrap();
    assert_eq!(parsed.full_name, "Ada Lovelace");
}

#[test]
fn volunteer_envelope_unwraps_user_field() {
    let parsed: VolunteerEnvelope = serde_json::from_value(serde_json::json!({
        "user": { "id": "u1", "email": "a@b.com" }
    }))
    .unwrap();
    assert_eq!(parsed.user.id, "u1");
    assert_eq!(parsed.user.full_name, "");
}
