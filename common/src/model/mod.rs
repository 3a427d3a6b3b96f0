pub mod contact;
pub mod feedback;
pub mod inquiry;
pub mod response;
mod submission;

pub use contact::ContactSubmission;
pub use feedback::{FeedbackSubmission, SubmitterType};
pub use inquiry::ProjectInquirySubmission;
pub use response::FormResponse;
pub use submission::FormSubmission;
