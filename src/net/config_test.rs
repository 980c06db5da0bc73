use super::*;

#[test]
fn api_url_joins_path_onto_base() {
    assert_eq!(api_url("/users/auth"), format!("{}/users/auth", api_base()));
}

#[test]
fn notif_url_joins_path_onto_base() {
    assert_eq!(
        notif_url("/notifications/abc"),
        format!("{}/notifications/abc", notif_base())
    );
}

#[test]
fn bases_have_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
    assert!(!notif_base().ends_with('/'));
}
