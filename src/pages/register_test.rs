use super::*;

fn volunteer_fields() -> RegisterFields {
    RegisterFields {
        kind: AccountKind::Volunteer,
        email: " ada@example.com ".to_owned(),
        password: "hunter22".to_owned(),
        confirm: "hunter22".to_owned(),
        description: "Keen helper".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        dob: "1815-12-10".to_owned(),
        organization_name: String::new(),
        address: String::new(),
    }
}

fn organization_fields() -> RegisterFields {
    RegisterFields {
        kind: AccountKind::Organization,
        email: "org@example.com".to_owned(),
        password: "hunter22".to_owned(),
        confirm: "hunter22".to_owned(),
        description: "Local shelter".to_owned(),
        full_name: String::new(),
        dob: String::new(),
        organization_name: "Shelter One".to_owned(),
        address: "1 Main St".to_owned(),
    }
}

// =============================================================
// Role-specific assembly
// =============================================================

#[test]
fn volunteer_form_carries_trimmed_volunteer_fields() {
    let form = build_register_form(&volunteer_fields()).unwrap();
    assert_eq!(form.kind(), AccountKind::Volunteer);
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(
        form.detail,
        RegisterDetail::Volunteer {
            full_name: "Ada Lovelace".to_owned(),
            dob: "1815-12-10".to_owned(),
        }
    );
}

#[test]
fn organization_form_carries_organization_fields() {
    let form = build_register_form(&organization_fields()).unwrap();
    assert_eq!(form.kind(), AccountKind::Organization);
    assert_eq!(
        form.detail,
        RegisterDetail::Organization {
            name: "Shelter One".to_owned(),
            address: "1 Main St".to_owned(),
        }
    );
}

// =============================================================
// Validation
// =============================================================

#[test]
fn mismatched_passwords_are_rejected() {
    let mut fields = volunteer_fields();
    fields.confirm = "different".to_owned();
    assert_eq!(build_register_form(&fields), Err("Passwords do not match."));
}

#[test]
fn empty_email_is_rejected() {
    let mut fields = volunteer_fields();
    fields.email = "   ".to_owned();
    assert_eq!(build_register_form(&fields), Err("Enter your email."));
}

#[test]
fn volunteer_requires_a_full_name() {
    let mut fields = volunteer_fields();
    fields.full_name = "  ".to_owned();
    assert_eq!(build_register_form(&fields), Err("Enter your full name."));
}

#[test]
fn organization_requires_a_name() {
    let mut fields = organization_fields();
    fields.organization_name = String::new();
    assert_eq!(
        build_register_form(&fields),
        Err("Enter your organization's name.")
    );
}
