use serde::{Deserialize, Serialize};

use crate::{
    ChoiceQuestion, Field, FieldErrors, FieldKey, Form, FormDefinition, FormValues, Question,
    QuestionKind, TextQuestion, messages, validate,
};

/// A closed set of options for a choice field.
///
/// `as_str` is both the option label and the value sent to the endpoint.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Position of this option in `ALL`.
    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or_default()
    }

    fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

/// How much the applicant already knows about computers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechKnowledge {
    Beginner,
    Intermediate,
    Advanced,
}

impl Choice for TechKnowledge {
    const ALL: &'static [Self] = &[Self::Beginner, Self::Intermediate, Self::Advanced];

    fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// The course the applicant registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    #[serde(rename = "Web Design")]
    WebDesign,
    #[serde(rename = "Computer Basics")]
    ComputerBasics,
}

impl Choice for Course {
    const ALL: &'static [Self] = &[Self::GraphicDesign, Self::WebDesign, Self::ComputerBasics];

    fn as_str(self) -> &'static str {
        match self {
            Self::GraphicDesign => "Graphic Design",
            Self::WebDesign => "Web Design",
            Self::ComputerBasics => "Computer Basics",
        }
    }
}

/// Class schedule: Monday/Wednesday/Friday, Tuesday/Thursday, or
/// Friday/Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceDays {
    #[serde(rename = "MWF")]
    Mwf,
    #[serde(rename = "TTH")]
    Tth,
    #[serde(rename = "FS")]
    Fs,
}

impl Choice for AttendanceDays {
    const ALL: &'static [Self] = &[Self::Mwf, Self::Tth, Self::Fs];

    fn as_str(self) -> &'static str {
        match self {
            Self::Mwf => "MWF",
            Self::Tth => "TTH",
            Self::Fs => "FS",
        }
    }
}

/// The data of one registration, as entered.
///
/// Serializes to a flat JSON object whose keys are exactly the field names.
/// Text is kept verbatim (no trimming); `date_of_birth` is the ISO
/// `YYYY-MM-DD` text. An unselected choice is `None` and serializes as `null`,
/// which only happens for records that fail validation and are never sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub date_of_birth: String,
    pub tech_knowledge: Option<TechKnowledge>,
    pub select_course: Option<Course>,
    pub preferred_attendance_days: Option<AttendanceDays>,
    pub email_address: String,
    pub phone_number: String,
    pub home_address: String,
}

impl RegistrationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of a text field; `None` for the three choice fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::MiddleName => Some(&self.middle_name),
            Field::DateOfBirth => Some(&self.date_of_birth),
            Field::EmailAddress => Some(&self.email_address),
            Field::PhoneNumber => Some(&self.phone_number),
            Field::HomeAddress => Some(&self.home_address),
            Field::TechKnowledge | Field::SelectCourse | Field::PreferredAttendanceDays => None,
        }
    }

    /// Mutable text of a text field; `None` for the three choice fields.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::MiddleName => Some(&mut self.middle_name),
            Field::DateOfBirth => Some(&mut self.date_of_birth),
            Field::EmailAddress => Some(&mut self.email_address),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::HomeAddress => Some(&mut self.home_address),
            Field::TechKnowledge | Field::SelectCourse | Field::PreferredAttendanceDays => None,
        }
    }

    /// Index of the selected option of a choice field, if one is selected.
    pub fn choice_index(&self, field: Field) -> Option<usize> {
        match field {
            Field::TechKnowledge => self.tech_knowledge.map(Choice::index),
            Field::SelectCourse => self.select_course.map(Choice::index),
            Field::PreferredAttendanceDays => self.preferred_attendance_days.map(Choice::index),
            _ => None,
        }
    }

    /// Option labels of a choice field; empty for text fields.
    pub fn choice_labels(field: Field) -> Vec<&'static str> {
        match field {
            Field::TechKnowledge => TechKnowledge::labels(),
            Field::SelectCourse => Course::labels(),
            Field::PreferredAttendanceDays => AttendanceDays::labels(),
            _ => Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        validate::validate(self).is_empty()
    }
}

fn text_question(field: Field) -> Question {
    let text = match field {
        Field::DateOfBirth => TextQuestion::new().placeholder("YYYY-MM-DD"),
        _ => TextQuestion::new(),
    };
    Question::new(field.key(), field.label(), QuestionKind::Text(text))
}

fn choice_question(field: Field) -> Question {
    let choice =
        ChoiceQuestion::new(RegistrationRecord::choice_labels(field)).placeholder(field.label());
    Question::new(field.key(), field.label(), QuestionKind::Choice(choice)).required()
}

fn choice_from<C: Choice>(values: &FormValues, key: &FieldKey) -> Option<C> {
    values.get_choice(key).ok().and_then(C::from_index)
}

impl Form for RegistrationRecord {
    fn definition() -> FormDefinition {
        let questions = vec![
            text_question(Field::FirstName).required(),
            text_question(Field::LastName).required(),
            text_question(Field::MiddleName),
            text_question(Field::DateOfBirth).required(),
            choice_question(Field::TechKnowledge),
            choice_question(Field::SelectCourse),
            choice_question(Field::PreferredAttendanceDays),
            text_question(Field::EmailAddress).required(),
            text_question(Field::PhoneNumber).required(),
            text_question(Field::HomeAddress),
        ];
        FormDefinition::new(messages::TITLE, questions).with_epilogue(messages::SUCCESS)
    }

    fn from_values(values: &FormValues) -> Self {
        let mut record = Self {
            tech_knowledge: choice_from(values, &Field::TechKnowledge.key()),
            select_course: choice_from(values, &Field::SelectCourse.key()),
            preferred_attendance_days: choice_from(values, &Field::PreferredAttendanceDays.key()),
            ..Self::default()
        };
        for field in Field::ALL {
            let text = values.text_or_empty(&field.key()).to_string();
            if let Some(slot) = record.text_mut(field) {
                *slot = text;
            }
        }
        record
    }

    fn to_values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in Field::ALL {
            if let Some(text) = self.text(field) {
                values.insert(field.key(), text);
            } else if let Some(idx) = self.choice_index(field) {
                values.insert(field.key(), idx);
            }
        }
        values
    }

    fn validate(&self) -> FieldErrors {
        validate::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> RegistrationRecord {
        RegistrationRecord {
            first_name: "Musu".into(),
            last_name: "Kollie".into(),
            middle_name: String::new(),
            date_of_birth: "2004-03-17".into(),
            tech_knowledge: Some(TechKnowledge::Intermediate),
            select_course: Some(Course::WebDesign),
            preferred_attendance_days: Some(AttendanceDays::Tth),
            email_address: "musu@example.com".into(),
            phone_number: "0770123456".into(),
            home_address: "Sinkor, Monrovia".into(),
        }
    }

    #[test]
    fn serializes_to_flat_object_with_literal_choice_values() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            value,
            json!({
                "first_name": "Musu",
                "last_name": "Kollie",
                "middle_name": "",
                "date_of_birth": "2004-03-17",
                "tech_knowledge": "Intermediate",
                "select_course": "Web Design",
                "preferred_attendance_days": "TTH",
                "email_address": "musu@example.com",
                "phone_number": "0770123456",
                "home_address": "Sinkor, Monrovia",
            })
        );
    }

    #[test]
    fn payload_has_exactly_the_ten_field_names() {
        let value = serde_json::to_value(RegistrationRecord::new()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Field::ALL.len());
        for field in Field::ALL {
            assert!(object.contains_key(field.name()), "missing {field}");
        }
    }

    #[test]
    fn values_round_trip_through_the_form() {
        let record = filled();
        assert_eq!(RegistrationRecord::from_values(&record.to_values()), record);
    }

    #[test]
    fn unselected_choice_is_absent_from_values() {
        let values = RegistrationRecord::new().to_values();
        assert!(!values.contains(&Field::SelectCourse.key()));
        assert_eq!(values.text_or_empty(&Field::FirstName.key()), "");
    }

    #[test]
    fn out_of_range_choice_reads_as_unselected() {
        let mut values = FormValues::new();
        values.insert(Field::SelectCourse.key(), 7usize);
        values.insert(Field::TechKnowledge.key(), "Advanced");

        let record = RegistrationRecord::from_values(&values);
        assert_eq!(record.select_course, None);
        assert_eq!(record.tech_knowledge, None);
    }

    #[test]
    fn definition_lists_fields_in_form_order() {
        let definition = RegistrationRecord::definition();
        let keys: Vec<_> = definition.questions().iter().map(|q| q.key().clone()).collect();
        let expected: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, expected);

        let required = definition
            .questions()
            .iter()
            .filter(|q| q.is_required())
            .count();
        assert_eq!(required, 8);
        assert_eq!(definition.epilogue.as_deref(), Some(messages::SUCCESS));
    }

    #[test]
    fn only_date_of_birth_has_a_placeholder() {
        let definition = RegistrationRecord::definition();
        let placeholders: Vec<_> = definition
            .questions()
            .iter()
            .filter_map(|q| match q.kind() {
                QuestionKind::Text(text) => text.placeholder.as_deref().map(|p| (q.key().as_str(), p)),
                QuestionKind::Choice(_) => None,
            })
            .collect();
        assert_eq!(placeholders, [("date_of_birth", "YYYY-MM-DD")]);
    }

    #[test]
    fn choice_labels_parse_back() {
        assert_eq!(Course::from_label("Computer Basics"), Some(Course::ComputerBasics));
        assert_eq!(AttendanceDays::from_label("Sunday"), None);
        assert_eq!(TechKnowledge::Advanced.index(), 2);
    }
}
