//! Form state and key handling, independent of any terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use registration::{
    Form, FormDefinition, FormValues, RegistrationRecord, RegistrationSession, SubmissionOutcome,
    SubmissionState, SubmitAttempt, messages,
};
use tracing::debug;

use crate::Theme;
use crate::field::FormField;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    /// Nothing beyond redrawing.
    Continue,
    /// Send this record. The session is already `Submitting`.
    Submit(RegistrationRecord),
    Quit,
}

/// The registration form as shown in the terminal.
///
/// Holds one input per question of the record's [`FormDefinition`] plus the
/// [`RegistrationSession`] those inputs feed. Every edit rebuilds the record
/// and hands it to the session, which revalidates it.
#[derive(Debug)]
pub struct FormView {
    pub(crate) fields: Vec<FormField>,
    pub(crate) focused_idx: usize,
    /// Scroll offset in rows
    pub(crate) scroll_offset: u16,
    pub(crate) submit_focused: bool,
    pub(crate) theme: Theme,
    pub(crate) title: String,
    pub(crate) confirmation: String,
    session: RegistrationSession,
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView {
    pub fn new() -> Self {
        Self::from_definition(&RegistrationRecord::definition())
    }

    fn from_definition(definition: &FormDefinition) -> Self {
        Self {
            fields: definition
                .questions()
                .iter()
                .map(FormField::from_question)
                .collect(),
            focused_idx: 0,
            scroll_offset: 0,
            submit_focused: false,
            theme: Theme::default(),
            title: definition.title.clone(),
            confirmation: definition
                .epilogue
                .clone()
                .unwrap_or_else(|| messages::SUCCESS.to_string()),
            session: RegistrationSession::new(),
        }
    }

    /// Set the heading shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn session(&self) -> &RegistrationSession {
        &self.session
    }

    pub fn state(&self) -> SubmissionState {
        self.session.state()
    }

    /// Key of the focused field; `None` while the submit button has focus.
    pub fn focused_key(&self) -> Option<&str> {
        if self.submit_focused {
            return None;
        }
        self.fields.get(self.focused_idx).map(|f| f.key.as_str())
    }

    pub fn is_submit_focused(&self) -> bool {
        self.submit_focused
    }

    /// Error shown under a field, if the field was touched and is invalid.
    pub(crate) fn visible_error(&self, field: &FormField) -> Option<String> {
        if !self.session.is_touched(&field.key) {
            return None;
        }
        self.session
            .errors()
            .get(&field.key)
            .map(|e| e.message().to_string())
    }

    /// Line shown between the heading and the fields.
    pub fn banner(&self) -> Option<&'static str> {
        match self.session.state() {
            SubmissionState::Submitting => Some(messages::SUBMITTING),
            SubmissionState::Error => Some(messages::SUBMISSION_FAILED),
            SubmissionState::Idle | SubmissionState::Success => None,
        }
    }

    /// Apply the outcome of the submission started by [`ViewAction::Submit`].
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) -> SubmissionState {
        let state = self.session.finish_submit(outcome);
        if state == SubmissionState::Success {
            self.reload();
        }
        state
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> ViewAction {
        if key.kind != KeyEventKind::Press {
            return ViewAction::Continue;
        }

        match self.session.state() {
            SubmissionState::Submitting => {
                debug!(code = ?key.code, "key ignored while submitting");
                ViewAction::Continue
            }
            SubmissionState::Success => self.handle_confirmation_key(key),
            SubmissionState::Idle | SubmissionState::Error => self.handle_form_key(key),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) -> ViewAction {
        match key.code {
            KeyCode::Esc => ViewAction::Quit,
            KeyCode::Enter => {
                self.session.start_over();
                self.focused_idx = 0;
                self.submit_focused = false;
                self.scroll_offset = 0;
                ViewAction::Continue
            }
            _ => ViewAction::Continue,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> ViewAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return ViewAction::Quit,
            // Ctrl+Enter or F10 submits from anywhere
            KeyCode::Enter if ctrl => return self.submit(),
            KeyCode::F(10) => return self.submit(),
            KeyCode::Enter if self.submit_focused => return self.submit(),
            KeyCode::Enter | KeyCode::Char(' ') if self.is_choice_focused() => {
                self.edit(FormField::select_highlighted);
            }
            KeyCode::Enter => self.next_field(),
            KeyCode::BackTab => self.prev_field(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_field(),
            KeyCode::Tab => self.next_field(),
            KeyCode::Up if self.is_choice_focused() => self.with_focused(FormField::option_up),
            KeyCode::Down if self.is_choice_focused() => {
                self.with_focused(FormField::option_down)
            }
            KeyCode::Up => self.prev_field(),
            KeyCode::Down => self.next_field(),
            KeyCode::Left if ctrl => self.prev_field(),
            KeyCode::Right if ctrl => self.next_field(),
            KeyCode::Left => self.with_focused(FormField::cursor_left),
            KeyCode::Right => self.with_focused(FormField::cursor_right),
            KeyCode::Home => self.with_focused(FormField::cursor_home),
            KeyCode::End => self.with_focused(FormField::cursor_end),
            KeyCode::PageDown => {
                for _ in 0..5 {
                    self.next_field();
                }
            }
            KeyCode::PageUp => {
                for _ in 0..5 {
                    self.prev_field();
                }
            }
            KeyCode::Backspace => self.edit(FormField::backspace),
            KeyCode::Delete => self.edit(FormField::delete),
            KeyCode::Char(c) if !ctrl => self.edit(|field| field.insert_char(c)),
            _ => {}
        }
        ViewAction::Continue
    }

    fn submit(&mut self) -> ViewAction {
        match self.session.begin_submit() {
            SubmitAttempt::Started(record) => ViewAction::Submit(record),
            SubmitAttempt::Invalid(errors) => {
                // Focus the first invalid field in form order
                if let Some(idx) = self.fields.iter().position(|f| errors.contains(&f.key)) {
                    self.focused_idx = idx;
                    self.submit_focused = false;
                }
                ViewAction::Continue
            }
            SubmitAttempt::InFlight => ViewAction::Continue,
        }
    }

    fn is_choice_focused(&self) -> bool {
        !self.submit_focused
            && self
                .fields
                .get(self.focused_idx)
                .is_some_and(FormField::is_choice)
    }

    fn with_focused(&mut self, apply: impl FnOnce(&mut FormField)) {
        if self.submit_focused {
            return;
        }
        if let Some(field) = self.fields.get_mut(self.focused_idx) {
            apply(field);
        }
    }

    /// Apply an edit to the focused field and, if it changed anything, push
    /// the rebuilt record to the session.
    fn edit(&mut self, apply: impl FnOnce(&mut FormField) -> bool) {
        if self.submit_focused {
            return;
        }
        let Some(field) = self.fields.get_mut(self.focused_idx) else {
            return;
        };
        if !apply(field) {
            return;
        }
        let key = field.key.clone();
        let record = RegistrationRecord::from_values(&self.values());
        if self.session.set_record(record) {
            self.session.touch(key);
        }
    }

    /// Current inputs as form values.
    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            if let Some(value) = field.to_value() {
                values.insert(field.key.clone(), value);
            }
        }
        values
    }

    /// Refill every input from the session's record.
    fn reload(&mut self) {
        let values = self.session.record().to_values();
        for field in &mut self.fields {
            field.load(&values);
        }
    }

    pub(crate) fn next_field(&mut self) {
        if self.submit_focused {
            return;
        }
        if self.focused_idx + 1 < self.fields.len() {
            self.focused_idx += 1;
        } else {
            // No more fields, focus the submit button
            self.submit_focused = true;
        }
    }

    pub(crate) fn prev_field(&mut self) {
        if self.submit_focused {
            self.submit_focused = false;
            self.focused_idx = self.fields.len().saturating_sub(1);
            return;
        }
        self.focused_idx = self.focused_idx.saturating_sub(1);
    }
}
