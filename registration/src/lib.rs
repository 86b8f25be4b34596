//! # registration
//!
//! Student registration: the record, its validation rules, and submission of
//! a valid record to a remote endpoint as JSON.
//!
//! The crate is frontend-agnostic. A view owns a [`RegistrationSession`],
//! feeds it the record as the user edits, and drives the network call through
//! a [`Submitter`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registration::{
//!     AttendanceDays, Course, HttpSubmitter, RegistrationConfig, RegistrationSession,
//!     SubmissionState, TechKnowledge,
//! };
//!
//! let submitter = HttpSubmitter::new(&RegistrationConfig::new("http://127.0.0.1:8000/api/students")?)?;
//! let mut session = RegistrationSession::new();
//! session.set_record(my_record);
//!
//! match session.submit(&submitter).await {
//!     SubmissionState::Success => println!("signed up"),
//!     SubmissionState::Error => println!("try again later"),
//!     _ => println!("fix the highlighted fields"),
//! }
//! ```
//!
//! ## Components
//!
//! - [`validate`] - the rule table for the ten fields
//! - [`RegistrationSession`] - record, errors and submission state of one form
//! - [`HttpSubmitter`] - `POST`s the record as JSON
//! - [`TestSubmitter`] - canned outcomes for tests

// Re-export all types from registration-types
pub use registration_types::*;

mod config;
pub use config::{ConfigError, DEFAULT_ENDPOINT, RegistrationConfig};

mod field;
pub use field::Field;

pub mod messages;

mod record;
pub use record::{AttendanceDays, Choice, Course, RegistrationRecord, TechKnowledge};

pub mod validate;

mod session;
pub use session::{RegistrationSession, SubmissionState, SubmitAttempt};

mod submitter;
pub use submitter::{HttpSubmitter, SubmissionError, SubmissionOutcome, Submitter};

mod test_submitter;
pub use test_submitter::TestSubmitter;
