//! Validation through the `Form` interface, the way a frontend sees it.

use registration::{Field, FieldKey, Form, FormValues, RegistrationRecord};

fn values_with(entries: &[(&str, &str)]) -> FormValues {
    let mut values = FormValues::new();
    for (key, text) in entries {
        values.insert(*key, *text);
    }
    values
}

#[test]
fn blank_form_lists_required_fields() {
    let record = RegistrationRecord::from_values(&FormValues::new());
    let errors = record.validate();

    let definition = RegistrationRecord::definition();
    let required: Vec<&str> = definition
        .questions()
        .iter()
        .filter(|q| q.is_required())
        .map(|q| q.key().as_str())
        .collect();
    let failing: Vec<&str> = errors.keys().map(FieldKey::as_str).collect();

    let mut required_sorted = required.clone();
    required_sorted.sort_unstable();
    assert_eq!(failing, required_sorted);
}

#[test]
fn messages_match_the_form() {
    let mut values = values_with(&[
        ("first_name", "Ada"),
        ("last_name", "Lovelace"),
        ("date_of_birth", "1815-12-10"),
        ("email_address", "not-an-email"),
        ("phone_number", "12a34"),
    ]);
    values.insert("tech_knowledge", 2usize);
    values.insert("select_course", 0usize);
    values.insert("preferred_attendance_days", 1usize);

    let errors = RegistrationRecord::from_values(&values).validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get(&Field::EmailAddress.key()).map(|e| e.message()),
        Some("Invalid email address")
    );
    assert_eq!(
        errors.get(&Field::PhoneNumber.key()).map(|e| e.message()),
        Some("Invalid phone number")
    );
}
