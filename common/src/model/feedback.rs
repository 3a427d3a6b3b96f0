use serde::{Deserialize, Serialize};

/// Feedback form payload. Required fields: name, email, feedback text.
///
/// Approval is not part of the submission: the Approved column is always
/// initialized to "N" on the endpoint side and only flipped by an admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub project: String,
    pub rating: u8,
    pub feedback: String,
    pub submitter_type: SubmitterType,
}

impl Default for FeedbackSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            position: String::new(),
            project: String::new(),
            rating: 5,
            feedback: String::new(),
            submitter_type: SubmitterType::default(),
        }
    }
}

/// Who is leaving the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmitterType {
    #[default]
    Client,
    Employee,
    Others,
}

impl SubmitterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitterType::Client => "Client",
            SubmitterType::Employee => "Employee",
            SubmitterType::Others => "Others",
        }
    }
}
