use super::*;

#[test]
fn complete_input_passes_validation() {
    assert_eq!(
        validate_event_input("Cleanup", "Park cleanup", "2026-09-01", "Central Park"),
        Ok(())
    );
}

#[test]
fn each_missing_field_gets_its_own_message() {
    assert_eq!(
        validate_event_input(" ", "d", "2026-09-01", "a"),
        Err("Enter an event name.")
    );
    assert_eq!(
        validate_event_input("n", "", "2026-09-01", "a"),
        Err("Enter a description.")
    );
    assert_eq!(
        validate_event_input("n", "d", "  ", "a"),
        Err("Pick a date.")
    );
    assert_eq!(
        validate_event_input("n", "d", "2026-09-01", ""),
        Err("Enter an address.")
    );
}
