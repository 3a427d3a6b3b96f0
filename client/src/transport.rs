//! Submission transport: direct JSON POST with a single form-encoded
//! fallback attempt.
//!
//! The fallback exists for deployments where the direct call is blocked at
//! the transport level (historically, cross-origin restrictions on the
//! browser client). Its response body is deliberately not read, so the
//! strongest claim it can make is "dispatched"; callers that need a
//! persistence guarantee must check for [`SubmissionOutcome::Confirmed`].

use chrono::{Local, SecondsFormat};
use common::model::{FormResponse, FormSubmission};
use common::{sanitize, validate};
use log::{info, warn};

use crate::config;

/// Outcome of one submission attempt, timestamped with the client's local
/// time at resolution. `Confirmed` is the only variant that guarantees the
/// row was persisted.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The endpoint processed the submission and confirmed the append.
    Confirmed(FormResponse),
    /// The fallback transport sent the data but could not observe the
    /// response; persistence is believed likely but unverified.
    DispatchedNotConfirmed { timestamp: String },
    /// The endpoint processed the submission and rejected it. Application
    /// rejections never trigger the fallback.
    Rejected { error: String, timestamp: String },
    /// Validation failed locally; nothing was sent.
    Invalid { reason: String, timestamp: String },
    /// Both transports failed at the connection level.
    Failed { error: String, timestamp: String },
}

impl SubmissionOutcome {
    /// True when the endpoint confirmed the append.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmissionOutcome::Confirmed(_))
    }

    /// True when the data is known or believed to have reached the
    /// endpoint, confirmed or not.
    pub fn is_dispatched(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Confirmed(_) | SubmissionOutcome::DispatchedNotConfirmed { .. }
        )
    }
}

/// Sends form submissions to the configured endpoint.
pub struct SheetsClient {
    endpoint: String,
    http: reqwest::Client,
}

impl SheetsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::endpoint_url())
    }

    /// Validates, sanitizes, and submits. One direct attempt, at most one
    /// fallback attempt, no retries or queuing beyond that.
    pub async fn submit(&self, submission: &FormSubmission) -> SubmissionOutcome {
        if let Err(reason) = validate::validate(submission) {
            return SubmissionOutcome::Invalid {
                reason,
                timestamp: now_local(),
            };
        }
        let clean = sanitize::sanitize(submission);

        match self.submit_json(&clean).await {
            Ok(response) if response.success => {
                info!("{} submission confirmed", clean.form_type());
                SubmissionOutcome::Confirmed(response)
            }
            Ok(response) => SubmissionOutcome::Rejected {
                error: response
                    .error
                    .unwrap_or_else(|| "Unknown error occurred".to_string()),
                timestamp: now_local(),
            },
            Err(err) => {
                warn!("direct submission failed ({err}), trying form-encoded fallback");
                self.submit_form(&clean).await
            }
        }
    }

    /// Diagnostic echo: sends `{"test": true}` and returns the endpoint's
    /// canned response.
    pub async fn ping(&self) -> Result<FormResponse, String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "test": true }))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error, status {}", response.status()));
        }
        response
            .json::<FormResponse>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn submit_json(&self, submission: &FormSubmission) -> Result<FormResponse, String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error, status {}", response.status()));
        }
        response
            .json::<FormResponse>()
            .await
            .map_err(|e| format!("Malformed endpoint response: {e}"))
    }

    async fn submit_form(&self, submission: &FormSubmission) -> SubmissionOutcome {
        let fields = form_fields(submission);
        match self.http.post(&self.endpoint).form(&fields).send().await {
            Ok(_) => SubmissionOutcome::DispatchedNotConfirmed {
                timestamp: now_local(),
            },
            Err(err) => SubmissionOutcome::Failed {
                error: err.to_string(),
                timestamp: now_local(),
            },
        }
    }
}

fn now_local() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
}

/// Flattens a submission into form-encoded pairs for the fallback
/// transport. List fields are joined with bare commas; the endpoint
/// re-splits and normalizes them on write.
pub(crate) fn form_fields(submission: &FormSubmission) -> Vec<(String, String)> {
    let mut fields = vec![("formType".to_string(), submission.form_type().to_string())];
    let mut push = |key: &str, value: String| fields.push((key.to_string(), value));

    match submission {
        FormSubmission::Contact(c) => {
            push("name", c.name.clone());
            push("email", c.email.clone());
            push("phone", c.phone.clone());
            push("company", c.company.clone());
            push("message", c.message.clone());
        }
        FormSubmission::ProjectInquiry(p) => {
            push("name", p.name.clone());
            push("email", p.email.clone());
            push("phone", p.phone.clone());
            push("company", p.company.clone());
            push("website", p.website.clone());
            push("primaryService", p.primary_service.clone());
            push("timeline", p.timeline.clone());
            push("budget", p.budget.clone());
            push("teamSize", p.team_size.clone());
            push("additionalTechnologies", p.additional_technologies.join(","));
            push("additionalServices", p.additional_services.join(","));
            push("additionalRequirements", p.additional_requirements.clone());
            push("customTechnology", p.custom_technology.clone());
        }
        FormSubmission::Feedback(f) => {
            push("name", f.name.clone());
            push("email", f.email.clone());
            push("company", f.company.clone());
            push("position", f.position.clone());
            push("project", f.project.clone());
            push("rating", f.rating.to_string());
            push("feedback", f.feedback.clone());
            push("submitterType", f.submitter_type.as_str().to_string());
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::{ContactSubmission, ProjectInquirySubmission};

    /// Serves the given responses to successive connections, then drops the
    /// listener so any extra attempt is refused.
    fn spawn_server(responses: Vec<(u16, &'static str)>) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/api/forms")
    }

    fn valid_contact() -> FormSubmission {
        FormSubmission::Contact(ContactSubmission {
            name: "John".to_string(),
            email: "john@company.com".to_string(),
            message: "Hello".to_string(),
            ..ContactSubmission::default()
        })
    }

    #[tokio::test]
    async fn confirmed_when_endpoint_declares_success() {
        let endpoint = spawn_server(vec![(
            200,
            r#"{"success":true,"message":"Contact form submitted successfully","timestamp":"t","formType":"contact","rowAdded":2}"#,
        )]);
        let client = SheetsClient::new(endpoint);

        match client.submit(&valid_contact()).await {
            SubmissionOutcome::Confirmed(response) => {
                assert_eq!(response.row_added, Some(2));
                assert_eq!(response.form_type.as_deref(), Some("contact"));
            }
            other => panic!("expected Confirmed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn endpoint_rejection_surfaces_error_without_fallback() {
        // One response only: a fallback attempt would hit a dropped
        // listener and turn the outcome into Failed.
        let endpoint = spawn_server(vec![(
            200,
            r#"{"success":false,"error":"Failed to save contact form: disk full","timestamp":"t"}"#,
        )]);
        let client = SheetsClient::new(endpoint);

        match client.submit(&valid_contact()).await {
            SubmissionOutcome::Rejected { error, .. } => {
                assert_eq!(error, "Failed to save contact form: disk full");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_falls_back_and_reports_dispatched_only() {
        let endpoint = spawn_server(vec![(500, ""), (200, r#"{"success":true,"timestamp":"t"}"#)]);
        let client = SheetsClient::new(endpoint);

        let outcome = client.submit(&valid_contact()).await;
        assert!(
            matches!(outcome, SubmissionOutcome::DispatchedNotConfirmed { .. }),
            "expected DispatchedNotConfirmed, got {outcome:?}"
        );
        assert!(outcome.is_dispatched() && !outcome.is_confirmed());
    }

    #[tokio::test]
    async fn invalid_submission_never_reaches_the_network() {
        // Endpoint that would fail instantly if contacted.
        let client = SheetsClient::new("http://127.0.0.1:1/api/forms");
        let submission = FormSubmission::Contact(ContactSubmission::default());

        match client.submit(&submission).await {
            SubmissionOutcome::Invalid { reason, .. } => {
                assert_eq!(reason, "Name is required");
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_resolves_to_failed_after_fallback() {
        let client = SheetsClient::new("http://127.0.0.1:1/api/forms");
        let submission = FormSubmission::Contact(ContactSubmission {
            name: "John".to_string(),
            email: "john@company.com".to_string(),
            message: "Hello".to_string(),
            ..ContactSubmission::default()
        });

        let outcome = client.submit(&submission).await;
        assert!(matches!(outcome, SubmissionOutcome::Failed { .. }));
        assert!(!outcome.is_dispatched());
    }

    #[test]
    fn form_fields_flatten_lists_with_bare_commas() {
        let submission = FormSubmission::ProjectInquiry(ProjectInquirySubmission {
            name: "Jane".to_string(),
            additional_technologies: vec!["React".to_string(), "Node.js".to_string()],
            ..ProjectInquirySubmission::default()
        });

        let fields = form_fields(&submission);
        assert_eq!(fields[0], ("formType".to_string(), "project-inquiry".to_string()));
        assert!(fields.contains(&(
            "additionalTechnologies".to_string(),
            "React,Node.js".to_string()
        )));
    }

    #[test]
    fn outcome_helpers_distinguish_confirmed_from_dispatched() {
        let confirmed = SubmissionOutcome::Confirmed(FormResponse::appended(
            "contact",
            "Contact form submitted successfully",
            2,
            "t",
        ));
        let dispatched = SubmissionOutcome::DispatchedNotConfirmed {
            timestamp: "t".to_string(),
        };

        assert!(confirmed.is_confirmed() && confirmed.is_dispatched());
        assert!(!dispatched.is_confirmed() && dispatched.is_dispatched());
    }
}
