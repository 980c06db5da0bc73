use super::*;

// =============================================================
// ApiError::from_status
// =============================================================

#[test]
fn from_status_extracts_server_error_field() {
    let err = ApiError::from_status(401, r#"{"error": "Invalid email or password"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: Some("Invalid email or password".to_owned()),
        }
    );
    assert_eq!(err.detail(), Some("Invalid email or password"));
}

#[test]
fn from_status_tolerates_non_json_body() {
    let err = ApiError::from_status(502, "Bad Gateway");
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            detail: None,
        }
    );
    assert_eq!(err.detail(), None);
}

#[test]
fn from_status_tolerates_json_without_error_field() {
    let err = ApiError::from_status(500, r#"{"message": "boom"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            detail: None,
        }
    );
}

#[test]
fn detail_is_none_for_non_status_errors() {
    assert_eq!(ApiError::Network("offline".to_owned()).detail(), None);
    assert_eq!(ApiError::Unsupported.detail(), None);
}

// =============================================================
// Display
// =============================================================

#[test]
fn status_error_displays_status_code() {
    let err = ApiError::from_status(404, "{}");
    assert_eq!(err.to_string(), "request failed with status 404");
}
