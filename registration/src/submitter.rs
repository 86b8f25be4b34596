//! Sending a registration to the remote endpoint.

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::{Field, RegistrationConfig, RegistrationRecord};

/// What a submission produces: the parsed response body, or why it failed.
pub type SubmissionOutcome = Result<Value, SubmissionError>;

/// Why a submission did not succeed.
///
/// The form shows the same banner for all of these; the distinction is kept
/// for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The request did not complete (connection refused, DNS, TLS, ...).
    #[error("registration request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("registration endpoint answered with status {status}")]
    Status {
        status: u16,
        /// The `detail` field of the error body, if it had one.
        detail: Option<String>,
    },

    /// The endpoint answered 2xx, but the body is not JSON.
    #[error("registration endpoint returned an unparseable body: {0}")]
    InvalidBody(#[source] serde_json::Error),
}

/// Sends a record somewhere and reports the outcome.
///
/// The returned future owns everything it needs, so a view can keep it while
/// it goes on handling input.
pub trait Submitter {
    fn submit(&self, record: &RegistrationRecord) -> BoxFuture<'static, SubmissionOutcome>;
}

/// `POST`s the record as JSON to the configured endpoint.
///
/// One request per call: no retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Create a submitter for the configured endpoint.
    pub fn new(config: &RegistrationConfig) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(SubmissionError::Transport)?;
        Ok(Self::with_client(http, config.endpoint.clone()))
    }

    /// Use an existing client (shared connection pool, custom TLS, ...).
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, record: &RegistrationRecord) -> BoxFuture<'static, SubmissionOutcome> {
        Box::pin(post_record(
            self.http.clone(),
            self.endpoint.clone(),
            record.clone(),
        ))
    }
}

async fn post_record(
    http: reqwest::Client,
    endpoint: Url,
    record: RegistrationRecord,
) -> SubmissionOutcome {
    info!(%endpoint, "submitting registration");
    debug!(filled = ?filled_fields(&record), "registration payload");

    let resp = http
        .post(endpoint)
        .json(&record)
        .send()
        .await
        .map_err(|e| {
            warn!(error = %e, "registration request did not complete");
            SubmissionError::Transport(e)
        })?;

    let status = resp.status();
    let body = resp.bytes().await.map_err(SubmissionError::Transport)?;

    if !status.is_success() {
        let detail = error_detail(&body);
        warn!(status = status.as_u16(), detail = ?detail, "registration rejected");
        return Err(SubmissionError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    let value: Value = serde_json::from_slice(&body).map_err(SubmissionError::InvalidBody)?;
    debug!(status = status.as_u16(), response = %value, "registration response");
    Ok(value)
}

/// Pull `detail` out of an error body like `{"detail": "bad request"}`.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Names of the fields that carry a value. Contact details stay out of logs.
fn filled_fields(record: &RegistrationRecord) -> Vec<&'static str> {
    Field::ALL
        .into_iter()
        .filter(|&field| match record.text(field) {
            Some(text) => !text.is_empty(),
            None => record.choice_index(field).is_some(),
        })
        .map(Field::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Choice, Course};

    #[test]
    fn detail_from_error_bodies() {
        assert_eq!(
            error_detail(br#"{"detail":"bad request"}"#).as_deref(),
            Some("bad request")
        );
        assert_eq!(
            error_detail(br#"{"detail":[{"loc":["email_address"]}]}"#).as_deref(),
            Some(r#"[{"loc":["email_address"]}]"#)
        );
        assert_eq!(error_detail(b"<html>oops</html>"), None);
        assert_eq!(error_detail(br#"{"error":"x"}"#), None);
    }

    #[test]
    fn payload_log_names_fields_without_values() {
        let record = RegistrationRecord {
            first_name: "Ada".into(),
            email_address: "ada@example.com".into(),
            phone_number: "0770123456".into(),
            select_course: Some(Course::ALL[0]),
            ..RegistrationRecord::new()
        };
        let filled = filled_fields(&record);
        assert_eq!(filled, ["first_name", "select_course", "email_address", "phone_number"]);

        let logged = format!("{filled:?}");
        assert!(!logged.contains("ada@example.com"));
        assert!(!logged.contains("0770123456"));
    }

    #[test]
    fn error_messages() {
        let err = SubmissionError::Status {
            status: 503,
            detail: None,
        };
        assert_eq!(err.to_string(), "registration endpoint answered with status 503");
    }
}
