use crate::{FieldErrors, FormDefinition, FormValues};

/// Trait for types that can be edited through a form.
///
/// The definition drives rendering, `from_values`/`to_values` convert between
/// the typed record and what the form holds, and `validate` decides whether
/// the record may be submitted.
pub trait Form: Sized {
    /// Returns the form structure (fields, labels, messages).
    fn definition() -> FormDefinition;

    /// Builds a record from the values currently entered.
    ///
    /// This is infallible: a field that is missing or holds a value of the
    /// wrong type becomes the field's empty state, and `validate` reports it.
    fn from_values(values: &FormValues) -> Self;

    /// The values a form should display for this record.
    fn to_values(&self) -> FormValues;

    /// Validates every field. An empty result means the record is valid.
    fn validate(&self) -> FieldErrors;
}
