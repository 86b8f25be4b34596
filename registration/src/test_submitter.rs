//! Test submitter for exercising a form without a network.
//!
//! `TestSubmitter` answers every submission with a pre-configured outcome and
//! remembers what it was sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use registration::{RegistrationSession, SubmissionState, TestSubmitter};
//!
//! let submitter = TestSubmitter::accepting(serde_json::json!({"id": 1}));
//! let mut session = RegistrationSession::new();
//! // ... fill in the record ...
//! assert_eq!(session.submit(&submitter).await, SubmissionState::Success);
//! assert_eq!(submitter.calls(), 1);
//! ```

use std::sync::{Arc, Mutex};

use futures::future::BoxFuture;
use serde_json::Value;

use crate::{RegistrationRecord, SubmissionError, SubmissionOutcome, Submitter};

#[derive(Debug, Clone)]
enum Reply {
    Accept(Value),
    Reject { status: u16, detail: Option<String> },
}

/// A submitter that returns a canned reply.
#[derive(Debug, Clone)]
pub struct TestSubmitter {
    reply: Reply,
    received: Arc<Mutex<Vec<RegistrationRecord>>>,
}

impl TestSubmitter {
    /// Every submission succeeds with `response` as the body.
    pub fn accepting(response: Value) -> Self {
        Self::with_reply(Reply::Accept(response))
    }

    /// Every submission fails with the given status.
    pub fn rejecting(status: u16, detail: Option<&str>) -> Self {
        Self::with_reply(Reply::Reject {
            status,
            detail: detail.map(str::to_string),
        })
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of submissions made so far.
    pub fn calls(&self) -> usize {
        self.received.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// Every record submitted so far, oldest first.
    pub fn received(&self) -> Vec<RegistrationRecord> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Submitter for TestSubmitter {
    fn submit(&self, record: &RegistrationRecord) -> BoxFuture<'static, SubmissionOutcome> {
        if let Ok(mut received) = self.received.lock() {
            received.push(record.clone());
        }
        let outcome = match &self.reply {
            Reply::Accept(value) => Ok(value.clone()),
            Reply::Reject { status, detail } => Err(SubmissionError::Status {
                status: *status,
                detail: detail.clone(),
            }),
        };
        Box::pin(async move { outcome })
    }
}
