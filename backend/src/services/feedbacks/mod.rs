//! # Feedback Read Service
//!
//! Read side of the feedback sheet: the testimonials client pulls every
//! stored row (header included) through one GET and does its own approval
//! filtering. Access is gated by the configured read key; this is the only
//! endpoint that exposes stored data.

mod values;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/feedbacks";

/// Registered routes:
///
/// *   **`GET /values?key=K`**: `{"values": [[...]]}` with every feedback
///     sheet row when `K` matches the configured read key, a 403 failure
///     body otherwise.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/values", get().to(values::process))
}
