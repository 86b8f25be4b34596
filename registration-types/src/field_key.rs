use std::fmt;

/// The name of a form field, e.g., `"first_name"`.
///
/// Used as keys in `FormValues` and `FieldErrors`. Keys are the field names
/// that end up in the submitted JSON object, so they are never renamed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    name: String,
}

impl FieldKey {
    /// Create a new key from a field name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Human-readable label derived from the key: `"home_address"` becomes
    /// `"Home Address"`.
    pub fn to_label(&self) -> String {
        self.name
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_snake_case() {
        assert_eq!(FieldKey::new("home_address").to_label(), "Home Address");
        assert_eq!(
            FieldKey::new("preferred_attendance_days").to_label(),
            "Preferred Attendance Days"
        );
        assert_eq!(FieldKey::new("").to_label(), "");
    }

    #[test]
    fn display_is_the_raw_name() {
        assert_eq!(FieldKey::from("email_address").to_string(), "email_address");
    }
}
