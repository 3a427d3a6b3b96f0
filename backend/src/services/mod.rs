pub mod feedbacks;
pub mod forms;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

/// Current server time in the ISO-8601 shape used throughout the response
/// contract and in every sheet's Timestamp column.
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Wraps a JSON body with the permissive CORS header set. Every response
/// goes through here so browser clients on foreign origins can read it.
/// Wildcard origin, no per-origin allowlist, no authentication.
pub(crate) fn cors_json(status: StatusCode, body: Value) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header((
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS, PUT, DELETE",
        ))
        .insert_header((
            "Access-Control-Allow-Headers",
            "Origin, X-Requested-With, Content-Type, Accept, Authorization, Cache-Control",
        ))
        .insert_header(("Access-Control-Allow-Credentials", "false"))
        .insert_header(("Access-Control-Max-Age", "1728000"))
        .json(body)
}
