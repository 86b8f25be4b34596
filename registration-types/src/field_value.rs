/// A single value entered into a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text (names, dates, email, phone, address).
    Text(String),

    /// The index of the selected option of a choice field.
    Choice(usize),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Choice(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<usize> for FieldValue {
    fn from(idx: usize) -> Self {
        Self::Choice(idx)
    }
}
