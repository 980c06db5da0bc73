use super::*;

#[test]
fn join_event_path_formats_expected_route() {
    assert_eq!(
        join_event_path("e42"),
        "/volunteering/register-for-event/e42/register"
    );
}

#[test]
fn event_paths_live_under_volunteering() {
    assert_eq!(NEAREST_EVENTS_PATH, "/volunteering/nearest-events");
    assert_eq!(CREATE_EVENT_PATH, "/volunteering/create-event");
}

#[test]
fn new_event_serializes_flat_with_coordinates() {
    let event = NewEvent {
        name: "Cleanup".to_owned(),
        description: "Park cleanup".to_owned(),
        date: "2026-09-01".to_owned(),
        address: "Central Park".to_owned(),
        lat: 40.78,
        lng: -73.97,
    };
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        serde_json::json!({
            "name": "Cleanup",
            "description": "Park cleanup",
            "date": "2026-09-01",
            "address": "Central Park",
            "lat": 40.78,
            "lng": -73.97,
        })
    );
}
