use super::*;

#[test]
fn volunteer_update_sends_description_and_full_name() {
    let update = ProfileUpdate {
        description: "Still keen".to_owned(),
        detail: ProfileUpdateDetail::Volunteer {
            full_name: "Ada Lovelace".to_owned(),
        },
        #[cfg(feature = "hydrate")]
        image: None,
    };
    assert_eq!(update.kind(), AccountKind::Volunteer);
    assert_eq!(
        update.field_pairs(),
        vec![("description", "Still keen"), ("fullName", "Ada Lovelace")]
    );
}

#[test]
fn organization_update_sends_name_and_address() {
    let update = ProfileUpdate {
        description: "Bigger shelter".to_owned(),
        detail: ProfileUpdateDetail::Organization {
            name: "Shelter One".to_owned(),
            address: "2 Main St".to_owned(),
        },
        #[cfg(feature = "hydrate")]
        image: None,
    };
    assert_eq!(update.kind(), AccountKind::Organization);
    assert_eq!(
        update.field_pairs(),
        vec![
            ("description", "Bigger shelter"),
            ("name", "Shelter One"),
            ("address", "2 Main St"),
        ]
    );
}
