//! Whitespace sanitation applied to submissions before they are sent.

use crate::model::{
    ContactSubmission, FeedbackSubmission, FormSubmission, ProjectInquirySubmission,
};

/// Returns a copy of the submission with every string field trimmed of
/// leading and trailing whitespace. List and numeric fields pass through
/// unchanged. The input is never mutated, and the operation is idempotent.
pub fn sanitize(submission: &FormSubmission) -> FormSubmission {
    match submission {
        FormSubmission::Contact(c) => FormSubmission::Contact(ContactSubmission {
            name: trimmed(&c.name),
            email: trimmed(&c.email),
            phone: trimmed(&c.phone),
            company: trimmed(&c.company),
            message: trimmed(&c.message),
        }),
        FormSubmission::ProjectInquiry(p) => {
            FormSubmission::ProjectInquiry(ProjectInquirySubmission {
                name: trimmed(&p.name),
                email: trimmed(&p.email),
                phone: trimmed(&p.phone),
                company: trimmed(&p.company),
                website: trimmed(&p.website),
                primary_service: trimmed(&p.primary_service),
                timeline: trimmed(&p.timeline),
                budget: trimmed(&p.budget),
                team_size: trimmed(&p.team_size),
                additional_technologies: p.additional_technologies.clone(),
                additional_services: p.additional_services.clone(),
                additional_requirements: trimmed(&p.additional_requirements),
                custom_technology: trimmed(&p.custom_technology),
            })
        }
        FormSubmission::Feedback(f) => FormSubmission::Feedback(FeedbackSubmission {
            name: trimmed(&f.name),
            email: trimmed(&f.email),
            company: trimmed(&f.company),
            position: trimmed(&f.position),
            project: trimmed(&f.project),
            rating: f.rating,
            feedback: trimmed(&f.feedback),
            submitter_type: f.submitter_type,
        }),
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
