use crate::Question;

/// The top-level structure containing all fields and messages of a form.
///
/// A definition is presentation-agnostic: a terminal view, a GUI, or a test
/// harness can all render it.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    /// Heading shown above the form.
    pub title: String,

    /// All fields, in display order.
    pub questions: Vec<Question>,

    /// Optional message shown after a successful submission.
    pub epilogue: Option<String>,
}

impl FormDefinition {
    /// Create a new form definition with the given title and questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
            epilogue: None,
        }
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
