//! Field validation.
//!
//! Every field has an ordered list of [`Rule`]s. Fields are checked
//! independently; the first rule a field breaks is the error reported for it.
//! Format rules pass on empty input, so an empty required field only ever
//! reports that it is required.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{Field, FieldError, FieldErrors, RegistrationRecord};

/// Same shape the HTML `type=email` input accepts.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Exactly `YYYY-MM-DD`. Chrono alone also takes `2001-2-3` or `+2001-02-03`.
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single constraint on a field, carrying the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank text, or a selected option.
    Required(&'static str),
    /// An ISO calendar date.
    Date(&'static str),
    Email(&'static str),
    /// ASCII digits only.
    Digits(&'static str),
}

/// What a rule is checked against.
#[derive(Debug, Clone, Copy)]
enum Input<'a> {
    Text(&'a str),
    Choice { selected: bool },
}

impl Rule {
    fn check(self, input: Input<'_>) -> Result<(), FieldError> {
        let ok = match (self, input) {
            (Rule::Required(_), Input::Text(text)) => !text.trim().is_empty(),
            (Rule::Required(_), Input::Choice { selected }) => selected,
            (_, Input::Text("")) => true,
            (Rule::Date(_), Input::Text(text)) => is_iso_date(text),
            (Rule::Email(_), Input::Text(text)) => is_valid_email(text),
            (Rule::Digits(_), Input::Text(text)) => is_digits_only(text),
            (_, Input::Choice { .. }) => true,
        };
        if ok { Ok(()) } else { Err(self.error()) }
    }

    fn error(self) -> FieldError {
        match self {
            Rule::Required(msg) => FieldError::Required(msg.to_string()),
            Rule::Date(msg) | Rule::Email(msg) | Rule::Digits(msg) => {
                FieldError::Format(msg.to_string())
            }
        }
    }
}

/// The rule table.
pub fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::FirstName => &[Rule::Required("First Name is required")],
        Field::LastName => &[Rule::Required("Last Name is required")],
        Field::DateOfBirth => &[
            Rule::Required("Date of Birth is required"),
            Rule::Date("Date of Birth must be a valid date (YYYY-MM-DD)"),
        ],
        Field::TechKnowledge => &[Rule::Required("Tech Knowledge is required")],
        Field::SelectCourse => &[Rule::Required("Select Course is required")],
        Field::PreferredAttendanceDays => {
            &[Rule::Required("Preferred Attendance Days is required")]
        }
        Field::EmailAddress => &[
            Rule::Required("Email is required"),
            Rule::Email("Invalid email address"),
        ],
        Field::PhoneNumber => &[
            Rule::Required("Phone Number is required"),
            Rule::Digits("Invalid phone number"),
        ],
        Field::MiddleName | Field::HomeAddress => &[],
    }
}

fn input_of(record: &RegistrationRecord, field: Field) -> Input<'_> {
    match record.text(field) {
        Some(text) => Input::Text(text),
        None => Input::Choice {
            selected: record.choice_index(field).is_some(),
        },
    }
}

/// Check a single field of `record`.
pub fn validate_field(record: &RegistrationRecord, field: Field) -> Result<(), FieldError> {
    let input = input_of(record, field);
    rules(field)
        .iter()
        .try_for_each(|rule| rule.check(input))
}

/// Check every field. An empty result means the record may be submitted.
pub fn validate(record: &RegistrationRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Err(error) = validate_field(record, field) {
            errors.insert(field, error);
        }
    }
    errors
}

pub fn is_valid_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

pub fn is_digits_only(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_iso_date(text: &str) -> bool {
    ISO_DATE.is_match(text) && NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok()
}
