use super::*;

fn ok_response(lat: f64, lng: f64) -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [
            { "geometry": { "location": { "lat": lat, "lng": lng } } }
        ]
    })
}

#[test]
fn parse_geocode_reads_first_result_location() {
    let parsed = parse_geocode(&ok_response(40.7128, -74.006)).unwrap();
    assert!((parsed.lat - 40.7128).abs() < f64::EPSILON);
    assert!((parsed.lng - -74.006).abs() < f64::EPSILON);
}

#[test]
fn parse_geocode_rejects_zero_results() {
    let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });
    assert_eq!(parse_geocode(&body), None);
}

#[test]
fn parse_geocode_rejects_ok_status_without_location() {
    let body = serde_json::json!({ "status": "OK", "results": [ {} ] });
    assert_eq!(parse_geocode(&body), None);
}

#[test]
fn parse_geocode_rejects_missing_status() {
    assert_eq!(parse_geocode(&serde_json::json!({})), None);
}
