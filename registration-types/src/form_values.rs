use std::collections::HashMap;

use crate::{FieldKey, FieldValue};

/// Error type for value access operations.
#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("Missing value for field: {0}")]
    Missing(FieldKey),

    #[error("Type mismatch at field '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: FieldKey,
        expected: &'static str,
        actual: &'static str,
    },
}

/// The values currently entered into a form, keyed by field.
///
/// A field without an entry has not been filled in (an unselected choice
/// field, for example).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<FieldKey, FieldValue>,
}

impl FormValues {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert a value for the given field.
    pub fn insert(&mut self, key: impl Into<FieldKey>, value: impl Into<FieldValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the value for the given field.
    pub fn get(&self, key: &FieldKey) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Check if a value exists for the given field.
    pub fn contains(&self, key: &FieldKey) -> bool {
        self.values.contains_key(key)
    }

    /// Get the selected option index for the given field.
    pub fn get_choice(&self, key: &FieldKey) -> Result<usize, ValueError> {
        match self.get(key) {
            Some(FieldValue::Choice(idx)) => Ok(*idx),
            Some(other) => Err(ValueError::TypeMismatch {
                key: key.clone(),
                expected: "Choice",
                actual: other.type_name(),
            }),
            None => Err(ValueError::Missing(key.clone())),
        }
    }

    /// Text value for the given field, or `""` if it was never filled in.
    pub fn text_or_empty(&self, key: &FieldKey) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut values = FormValues::new();
        values.insert("first_name", "Ada");
        values.insert("select_course", 2usize);

        assert_eq!(values.text_or_empty(&FieldKey::new("first_name")), "Ada");
        assert_eq!(values.get_choice(&FieldKey::new("select_course")).unwrap(), 2);
    }

    #[test]
    fn type_mismatch_error() {
        let mut values = FormValues::new();
        values.insert("tech_knowledge", "Advanced");

        let result = values.get_choice(&FieldKey::new("tech_knowledge"));
        assert!(matches!(result, Err(ValueError::TypeMismatch { .. })));
    }

    #[test]
    fn missing_text_reads_as_empty() {
        let values = FormValues::new();
        assert_eq!(values.text_or_empty(&FieldKey::new("home_address")), "");
        assert!(matches!(
            values.get_choice(&FieldKey::new("select_course")),
            Err(ValueError::Missing(_))
        ));
    }
}
