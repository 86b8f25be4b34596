use crate::FieldKey;

/// A single field of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key this field's value is stored under.
    key: FieldKey,

    /// The label shown next to the field.
    label: String,

    /// The kind of field (determines input handling).
    kind: QuestionKind,

    /// Whether the field must be filled in before submitting.
    required: bool,
}

impl Question {
    /// Create a new optional question.
    pub fn new(key: impl Into<FieldKey>, label: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    /// Mark the question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn key(&self) -> &FieldKey {
        &self.key
    }

    /// Get the label, falling back to one derived from the key.
    pub fn label(&self) -> String {
        if self.label.is_empty() {
            self.key.to_label()
        } else {
            self.label.clone()
        }
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The kind of question, determining input type.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input.
    Text(TextQuestion),

    /// Pick exactly one of a fixed list of options.
    Choice(ChoiceQuestion),
}

/// Configuration for a text input question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextQuestion {
    /// Text shown while the field is empty.
    pub placeholder: Option<String>,
}

impl TextQuestion {
    /// Create a plain text question.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Configuration for a choice question (select exactly one option).
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceQuestion {
    /// Option labels, in display order. The submitted value of an option is
    /// decided by the form type, not by the label.
    pub options: Vec<String>,

    /// Text shown while nothing is selected.
    pub placeholder: Option<String>,
}

impl ChoiceQuestion {
    /// Create a new choice question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            placeholder: None,
        }
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}
