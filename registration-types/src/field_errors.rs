use std::collections::BTreeMap;
use std::fmt;

use crate::FieldKey;

/// A constraint violation on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is required but empty (or, for choices, unselected).
    Required(String),

    /// The field has a value, but not one of the accepted shape.
    Format(String),
}

impl FieldError {
    /// The message shown next to the field.
    pub fn message(&self) -> &str {
        match self {
            Self::Required(msg) | Self::Format(msg) => msg,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validation result for a whole form: at most one error per field.
///
/// An empty collection means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldKey, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `key`, replacing any earlier one.
    pub fn insert(&mut self, key: impl Into<FieldKey>, error: FieldError) {
        self.errors.insert(key.into(), error);
    }

    pub fn get(&self, key: &FieldKey) -> Option<&FieldError> {
        self.errors.get(key)
    }

    pub fn contains(&self, key: &FieldKey) -> bool {
        self.errors.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FieldError)> {
        self.errors.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.errors.keys()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Keep only the errors whose key satisfies `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(&FieldKey) -> bool) -> Self {
        Self {
            errors: self
                .errors
                .iter()
                .filter(|(key, _)| keep(key))
                .map(|(key, error)| (key.clone(), error.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_error_replaces_earlier() {
        let mut errors = FieldErrors::new();
        errors.insert("email_address", FieldError::Required("Email is required".into()));
        errors.insert("email_address", FieldError::Format("Invalid email address".into()));

        assert_eq!(errors.len(), 1);
        let err = errors.get(&FieldKey::new("email_address")).unwrap();
        assert!(err.is_format());
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn filtered_keeps_matching_keys() {
        let mut errors = FieldErrors::new();
        errors.insert("first_name", FieldError::Required("First Name is required".into()));
        errors.insert("last_name", FieldError::Required("Last Name is required".into()));

        let only_first = errors.filtered(|key| key.as_str() == "first_name");
        assert_eq!(only_first.len(), 1);
        assert!(only_first.contains(&FieldKey::new("first_name")));
    }
}
