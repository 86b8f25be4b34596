//! The state of one registration form: the record being edited, its
//! validation errors, and where the submission stands.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::{
    Field, FieldErrors, FieldKey, RegistrationRecord, SubmissionError, SubmissionOutcome,
    Submitter, validate,
};

/// Where the form stands with respect to submission.
///
/// ```text
/// Idle ──submit (valid)──▶ Submitting ──2xx + JSON──▶ Success
///  ▲                           │
///  │                           └──anything else──▶ Error
///  └──────────── next submit attempt ◀──────────────┘ (from Success or Error)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight. Input is inert.
    Submitting,
    /// The last request was accepted; the record has been reset.
    Success,
    /// The last request failed; the record is untouched.
    Error,
}

/// Result of triggering submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// The record is valid and the session is now `Submitting`. The caller
    /// sends this snapshot and reports back with `finish_submit`.
    Started(RegistrationRecord),
    /// Validation failed; nothing is sent.
    Invalid(FieldErrors),
    /// A submission is already in flight; the trigger is ignored.
    InFlight,
}

/// Record, errors, and submission state of a single form.
///
/// Validation runs after every change, so `errors` is always current.
/// Errors are only *shown* for touched fields: those the user edited, or all
/// of them once submit was attempted.
#[derive(Debug)]
pub struct RegistrationSession {
    record: RegistrationRecord,
    errors: FieldErrors,
    touched: HashSet<FieldKey>,
    state: SubmissionState,
    last_failure: Option<SubmissionError>,
}

impl RegistrationSession {
    /// A fresh session with an empty record.
    pub fn new() -> Self {
        let record = RegistrationRecord::default();
        Self {
            errors: validate::validate(&record),
            record,
            touched: HashSet::new(),
            state: SubmissionState::Idle,
            last_failure: None,
        }
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    /// All current validation errors, touched or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Errors of touched fields only.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors.filtered(|key| self.touched.contains(key))
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_touched(&self, key: &FieldKey) -> bool {
        self.touched.contains(key)
    }

    /// Why the last submission failed, for diagnostics. The UI only ever
    /// shows a generic banner.
    pub fn last_failure(&self) -> Option<&SubmissionError> {
        self.last_failure.as_ref()
    }

    /// Change one field. Ignored while submitting.
    pub fn edit(&mut self, field: Field, apply: impl FnOnce(&mut RegistrationRecord)) -> bool {
        if self.is_submitting() {
            return false;
        }
        apply(&mut self.record);
        self.touched.insert(field.key());
        self.revalidate();
        true
    }

    /// Replace the whole record. Ignored while submitting.
    pub fn set_record(&mut self, record: RegistrationRecord) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.record = record;
        self.revalidate();
        true
    }

    /// Mark a field as touched so its error becomes visible.
    pub fn touch(&mut self, key: impl Into<FieldKey>) {
        self.touched.insert(key.into());
    }

    /// Handle a submit trigger.
    ///
    /// From `Success` or `Error` the session first returns to `Idle`. The
    /// record is then validated with every field touched; a valid record moves
    /// the session to `Submitting`.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            debug!("submit ignored, a submission is already in flight");
            return SubmitAttempt::InFlight;
        }

        self.state = SubmissionState::Idle;
        self.touched.extend(Field::ALL.map(Field::key));
        self.revalidate();

        if !self.errors.is_empty() {
            info!(invalid_fields = self.errors.len(), "submit blocked by validation");
            return SubmitAttempt::Invalid(self.errors.clone());
        }

        self.state = SubmissionState::Submitting;
        self.last_failure = None;
        SubmitAttempt::Started(self.record.clone())
    }

    /// Apply the outcome of the request started by `begin_submit`.
    ///
    /// Leaves `Submitting` unconditionally. An outcome arriving in any other
    /// state is dropped.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) -> SubmissionState {
        if !self.is_submitting() {
            warn!(state = ?self.state, "submission outcome arrived with nothing in flight");
            return self.state;
        }

        match outcome {
            Ok(response) => {
                info!("registration accepted");
                debug!(%response, "registration response");
                self.record = RegistrationRecord::default();
                self.touched.clear();
                self.revalidate();
                self.state = SubmissionState::Success;
            }
            Err(err) => {
                warn!(error = %err, "registration failed");
                self.last_failure = Some(err);
                self.state = SubmissionState::Error;
            }
        }
        self.state
    }

    /// Validate, send through `submitter`, and apply the outcome.
    ///
    /// Returns the state afterwards: `Success` or `Error` when a request was
    /// made, otherwise the unchanged state (`Idle` for an invalid record).
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmissionState
    where
        S: Submitter + ?Sized,
    {
        match self.begin_submit() {
            SubmitAttempt::Started(record) => {
                let outcome = submitter.submit(&record).await;
                self.finish_submit(outcome)
            }
            SubmitAttempt::Invalid(_) | SubmitAttempt::InFlight => self.state,
        }
    }

    /// Leave the confirmation and show an empty form again.
    pub fn start_over(&mut self) -> bool {
        if self.state != SubmissionState::Success {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    fn revalidate(&mut self) {
        self.errors = validate::validate(&self.record);
    }
}

impl Default for RegistrationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AttendanceDays, Course, TechKnowledge};
    use serde_json::json;

    fn fill(session: &mut RegistrationSession) {
        session.set_record(RegistrationRecord {
            first_name: "Comfort".into(),
            last_name: "Doe".into(),
            date_of_birth: "2002-07-26".into(),
            tech_knowledge: Some(TechKnowledge::Advanced),
            select_course: Some(Course::GraphicDesign),
            preferred_attendance_days: Some(AttendanceDays::Fs),
            email_address: "comfort@example.com".into(),
            phone_number: "0886000111".into(),
            ..RegistrationRecord::default()
        });
    }

    #[test]
    fn fresh_session_is_idle_with_hidden_errors() {
        let session = RegistrationSession::new();
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.errors().len(), 8);
        assert!(session.visible_errors().is_empty());
    }

    #[test]
    fn editing_touches_and_revalidates() {
        let mut session = RegistrationSession::new();
        session.edit(Field::PhoneNumber, |r| r.phone_number = "12a34".into());

        let visible = session.visible_errors();
        assert_eq!(visible.len(), 1);
        assert!(visible.get(&Field::PhoneNumber.key()).is_some_and(|e| e.is_format()));
    }

    #[test]
    fn invalid_submit_touches_everything_and_stays_idle() {
        let mut session = RegistrationSession::new();
        let attempt = session.begin_submit();

        assert!(matches!(attempt, SubmitAttempt::Invalid(ref errors) if errors.len() == 8));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.visible_errors().len(), 8);
    }

    #[test]
    fn second_trigger_while_in_flight_is_ignored() {
        let mut session = RegistrationSession::new();
        fill(&mut session);

        assert!(matches!(session.begin_submit(), SubmitAttempt::Started(_)));
        assert_eq!(session.begin_submit(), SubmitAttempt::InFlight);
        assert!(session.is_submitting());
    }

    #[test]
    fn edits_are_inert_while_submitting() {
        let mut session = RegistrationSession::new();
        fill(&mut session);
        session.begin_submit();

        assert!(!session.edit(Field::FirstName, |r| r.first_name.clear()));
        assert!(!session.set_record(RegistrationRecord::default()));
        assert_eq!(session.record().first_name, "Comfort");
    }

    #[test]
    fn success_resets_the_record() {
        let mut session = RegistrationSession::new();
        fill(&mut session);
        session.begin_submit();

        let state = session.finish_submit(Ok(json!({"id": 1})));
        assert_eq!(state, SubmissionState::Success);
        assert_eq!(session.record(), &RegistrationRecord::default());
        assert!(session.visible_errors().is_empty());

        assert!(session.start_over());
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn failure_keeps_the_record_and_recovers_on_next_submit() {
        let mut session = RegistrationSession::new();
        fill(&mut session);
        let before = session.record().clone();
        session.begin_submit();

        let state = session.finish_submit(Err(SubmissionError::Status {
            status: 400,
            detail: Some("bad request".into()),
        }));
        assert_eq!(state, SubmissionState::Error);
        assert_eq!(session.record(), &before);
        assert!(session.last_failure().is_some());
        assert!(!session.start_over());

        assert!(session.edit(Field::HomeAddress, |r| r.home_address = "Paynesville".into()));
        assert_eq!(session.state(), SubmissionState::Error);
        assert!(matches!(session.begin_submit(), SubmitAttempt::Started(r) if r.home_address == "Paynesville"));
        assert!(session.last_failure().is_none());
    }

    #[test]
    fn stray_outcome_is_dropped() {
        let mut session = RegistrationSession::new();
        assert_eq!(session.finish_submit(Ok(json!({}))), SubmissionState::Idle);
    }
}
