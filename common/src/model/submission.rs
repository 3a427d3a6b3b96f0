use serde::{Deserialize, Serialize};

use crate::model::contact::ContactSubmission;
use crate::model::feedback::FeedbackSubmission;
use crate::model::inquiry::ProjectInquirySubmission;

/// A form submission as it travels over the wire, tagged by `formType`.
///
/// The tag values match what the endpoint dispatches on, so serializing any
/// variant to JSON produces a payload the forms endpoint accepts as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "formType")]
pub enum FormSubmission {
    #[serde(rename = "contact")]
    Contact(ContactSubmission),
    #[serde(rename = "project-inquiry")]
    ProjectInquiry(ProjectInquirySubmission),
    #[serde(rename = "feedback")]
    Feedback(FeedbackSubmission),
}

impl FormSubmission {
    /// The `formType` tag value for this submission kind.
    pub fn form_type(&self) -> &'static str {
        match self {
            FormSubmission::Contact(_) => "contact",
            FormSubmission::ProjectInquiry(_) => "project-inquiry",
            FormSubmission::Feedback(_) => "feedback",
        }
    }
}
