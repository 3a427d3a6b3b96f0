//! Client library for the website forms pipeline: submission transport with
//! a form-encoded fallback, and the approved-feedback reader behind the
//! testimonials display.

pub mod config;
pub mod feedbacks;
pub mod transport;

pub use feedbacks::{ApprovedFeedback, FeedbackReader, Testimonial};
pub use transport::{SheetsClient, SubmissionOutcome};
