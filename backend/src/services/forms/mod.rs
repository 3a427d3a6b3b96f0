//! # Form Submission Service
//!
//! One logical endpoint accepting website form submissions and appending
//! them to the per-kind sheets. The same handler serves three delivery
//! styles so the browser client can fall back between them:
//!
//! *   **`POST /api/forms`**: JSON body (primary) or URL-encoded body
//!     (form fallback).
//! *   **`GET /api/forms`**: fields delivered as query parameters.
//! *   **`OPTIONS /api/forms`**: CORS preflight, answered with an empty
//!     success body and the full CORS header set.
//!
//! Dispatch happens on the payload's `formType` field; a `test` field
//! short-circuits to a diagnostic echo. Every outcome, including parse and
//! storage failures, is returned as a JSON `{success, ...}` body.

mod contact;
mod dispatch;
mod feedback;
mod inquiry;

use actix_web::http::Method;
use actix_web::web::{self, get, post};
use actix_web::Resource;
use serde_json::{Map, Value};

const API_PATH: &str = "/api/forms";

pub fn configure_routes() -> Resource {
    web::resource(API_PATH)
        .route(post().to(dispatch::process_post))
        .route(get().to(dispatch::process_get))
        .route(web::method(Method::OPTIONS).to(dispatch::preflight))
}

/// Feedback sheet header, shared with the read-side tests.
#[cfg(test)]
pub(crate) fn feedback_header() -> [&'static str; 11] {
    feedback::HEADER
}

/// Looks up a scalar field in the parsed payload, defaulting to an empty
/// string when the field is missing or not a scalar.
pub(crate) fn field(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Normalizes a list-valued field into a `", "`-joined string. JSON bodies
/// deliver these as arrays; form-encoded fallbacks deliver them already
/// flattened with bare commas, so those are re-split, trimmed, and re-joined.
pub(crate) fn flatten_list(data: &Map<String, Value>, key: &str) -> String {
    match data.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) if s.contains(',') => s
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Rating column value: clamped to 1-5, defaulting to 5 when the field is
/// missing or non-numeric.
pub(crate) fn rating(data: &Map<String, Value>, key: &str) -> u8 {
    let parsed = match data.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(r) => r.clamp(1, 5) as u8,
        None => 5,
    }
}
