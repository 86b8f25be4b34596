//! Core types for the student registration form.
//!
//! This crate provides the presentation-agnostic building blocks of a form:
//! - `FormDefinition` - The top-level form structure
//! - `Question` and `QuestionKind` - Individual fields and their input types
//! - `FormValues` and `FieldKey` - Entered data and the keys that name it
//! - `FieldErrors` and `FieldError` - Per-field validation results
//! - `Form` trait - For types that can be edited through a form

mod field_key;
pub use field_key::FieldKey;

mod field_value;
pub use field_value::FieldValue;

mod form_values;
pub use form_values::{FormValues, ValueError};

mod question;
pub use question::{ChoiceQuestion, Question, QuestionKind, TextQuestion};

mod form_definition;
pub use form_definition::FormDefinition;

mod field_errors;
pub use field_errors::{FieldError, FieldErrors};

mod traits;
pub use traits::Form;
