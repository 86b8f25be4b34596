use std::fmt;

use crate::FieldKey;

/// The ten fields of a registration, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    MiddleName,
    DateOfBirth,
    TechKnowledge,
    SelectCourse,
    PreferredAttendanceDays,
    EmailAddress,
    PhoneNumber,
    HomeAddress,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::LastName,
        Field::MiddleName,
        Field::DateOfBirth,
        Field::TechKnowledge,
        Field::SelectCourse,
        Field::PreferredAttendanceDays,
        Field::EmailAddress,
        Field::PhoneNumber,
        Field::HomeAddress,
    ];

    /// The field name, as it appears in the submitted JSON.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::MiddleName => "middle_name",
            Field::DateOfBirth => "date_of_birth",
            Field::TechKnowledge => "tech_knowledge",
            Field::SelectCourse => "select_course",
            Field::PreferredAttendanceDays => "preferred_attendance_days",
            Field::EmailAddress => "email_address",
            Field::PhoneNumber => "phone_number",
            Field::HomeAddress => "home_address",
        }
    }

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::MiddleName => "Middle Name (Optional)",
            Field::DateOfBirth => "Date of Birth",
            Field::TechKnowledge => "Tech Knowledge",
            Field::SelectCourse => "Select Course",
            Field::PreferredAttendanceDays => "Preferred Attendance Days",
            Field::EmailAddress => "Email Address",
            Field::PhoneNumber => "Phone Number",
            Field::HomeAddress => "Home Address",
        }
    }

    pub fn key(self) -> FieldKey {
        FieldKey::new(self.name())
    }

    pub fn from_key(key: &FieldKey) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.name() == key.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Field> for FieldKey {
    fn from(field: Field) -> Self {
        field.key()
    }
}
