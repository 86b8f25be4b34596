//! A single input of the form and its editing operations.

use registration::{FieldKey, FieldValue, FormValues, Question, QuestionKind};
use unicode_width::UnicodeWidthChar;

/// Type of field for rendering and input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text {
        placeholder: Option<String>,
    },
    Choice {
        options: Vec<String>,
        placeholder: Option<String>,
        selected: Option<usize>,
        /// Currently highlighted option (for keyboard navigation)
        highlight: usize,
    },
}

/// A field in the form.
#[derive(Debug, Clone)]
pub(crate) struct FormField {
    pub key: FieldKey,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    /// Cursor position in characters, not bytes.
    pub cursor: usize,
    /// First character shown when the text is wider than the field.
    pub offset: usize,
}

impl FormField {
    pub fn from_question(question: &Question) -> Self {
        let kind = match question.kind() {
            QuestionKind::Text(text) => FieldKind::Text {
                placeholder: text.placeholder.clone(),
            },
            QuestionKind::Choice(choice) => FieldKind::Choice {
                options: choice.options().to_vec(),
                placeholder: choice.placeholder.clone(),
                selected: None,
                highlight: 0,
            },
        };
        Self {
            key: question.key().clone(),
            label: question.label(),
            kind,
            value: String::new(),
            cursor: 0,
            offset: 0,
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice { .. })
    }

    /// Current input as a form value; `None` for an unselected choice.
    pub fn to_value(&self) -> Option<FieldValue> {
        match &self.kind {
            FieldKind::Text { .. } => Some(FieldValue::Text(self.value.clone())),
            FieldKind::Choice { selected, .. } => selected.map(FieldValue::Choice),
        }
    }

    /// Overwrite the input from `values`. A missing entry clears the field.
    pub fn load(&mut self, values: &FormValues) {
        match &mut self.kind {
            FieldKind::Text { .. } => {
                self.value = values.text_or_empty(&self.key).to_string();
                self.cursor = self.value.chars().count();
                self.offset = 0;
            }
            FieldKind::Choice {
                options,
                selected,
                highlight,
                ..
            } => {
                *selected = values
                    .get_choice(&self.key)
                    .ok()
                    .filter(|idx| *idx < options.len());
                *highlight = selected.unwrap_or(0);
            }
        }
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns whether the value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.is_choice() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.is_choice() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.is_choice() || self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    /// Display columns taken by the characters `from..to`.
    fn width_between(&self, from: usize, to: usize) -> usize {
        self.value
            .chars()
            .skip(from)
            .take(to.saturating_sub(from))
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Move the horizontal offset so the cursor fits in `width` columns,
    /// with one column left for the cursor itself.
    pub fn scroll_to_cursor(&mut self, width: u16) {
        let width = usize::from(width);
        if width == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        while self.offset < self.cursor && self.width_between(self.offset, self.cursor) >= width {
            self.offset += 1;
        }
    }

    /// Text from the horizontal offset on, and the cursor column within it.
    pub fn visible_text(&self) -> (String, u16) {
        let text = self.value.chars().skip(self.offset).collect();
        let column = self.width_between(self.offset, self.cursor);
        (text, u16::try_from(column).unwrap_or(u16::MAX))
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Move highlight up within the options, wrapping around.
    pub fn option_up(&mut self) {
        if let FieldKind::Choice {
            options, highlight, ..
        } = &mut self.kind
            && !options.is_empty()
        {
            *highlight = (*highlight + options.len() - 1) % options.len();
        }
    }

    /// Move highlight down within the options, wrapping around.
    pub fn option_down(&mut self) {
        if let FieldKind::Choice {
            options, highlight, ..
        } = &mut self.kind
            && !options.is_empty()
        {
            *highlight = (*highlight + 1) % options.len();
        }
    }

    /// Select the highlighted option. Re-selecting the current option is not
    /// a change.
    pub fn select_highlighted(&mut self) -> bool {
        match &mut self.kind {
            FieldKind::Choice {
                selected, highlight, ..
            } if *selected != Some(*highlight) => {
                *selected = Some(*highlight);
                true
            }
            _ => false,
        }
    }
}
