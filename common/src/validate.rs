//! Client-side validation for form submissions.
//!
//! Checks run in a fixed order and the first failure wins, so a submission
//! with several problems reports the same reason every time: name, then
//! email format, then phone format (only when a phone was supplied), then
//! the kind-specific required fields.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::FormSubmission;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone regex"))
}

/// True when the address has a local part, one `@`, and a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

/// True when, after stripping whitespace, hyphens, and parentheses, the
/// number is an optional `+` followed by 1-16 digits starting non-zero.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    phone_re().is_match(&digits)
}

/// Validates a submission, returning a human-readable reason for the first
/// failing required-field check. No side effects.
pub fn validate(submission: &FormSubmission) -> Result<(), String> {
    match submission {
        FormSubmission::Contact(c) => {
            require(&c.name, "Name is required")?;
            require_email(&c.email)?;
            require_phone_if_present(&c.phone)?;
            require(&c.message, "Message is required")?;
        }
        FormSubmission::ProjectInquiry(p) => {
            require(&p.name, "Name is required")?;
            require_email(&p.email)?;
            require_phone_if_present(&p.phone)?;
            require(&p.timeline, "Project timeline is required")?;
            require(&p.budget, "Budget range is required")?;
        }
        FormSubmission::Feedback(f) => {
            require(&f.name, "Name is required")?;
            require_email(&f.email)?;
            require(&f.feedback, "Feedback is required")?;
        }
    }
    Ok(())
}

fn require(value: &str, reason: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(reason.to_string());
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), String> {
    if !is_valid_email(email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(())
}

fn require_phone_if_present(phone: &str) -> Result<(), String> {
    if !phone.trim().is_empty() && !is_valid_phone(phone) {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}
