//! Request parsing and form-type dispatch.
//!
//! The handler never lets a failure escape: every branch, including
//! malformed payloads and storage errors, resolves to a JSON
//! `{success:false, error, timestamp}` body with the CORS header set.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info};
use serde_json::{json, Map, Value};

use crate::services::{cors_json, now_iso};
use crate::sheets::SheetRegistry;

use super::{contact, feedback, inquiry};

pub(crate) async fn process_post(
    sheets: web::Data<SheetRegistry>,
    body: web::Bytes,
    req: HttpRequest,
) -> HttpResponse {
    handle(&sheets, &body, req.query_string())
}

pub(crate) async fn process_get(
    sheets: web::Data<SheetRegistry>,
    req: HttpRequest,
) -> HttpResponse {
    handle(&sheets, &[], req.query_string())
}

/// CORS preflight: empty success body, same header set as every response.
pub(crate) async fn preflight() -> HttpResponse {
    cors_json(
        StatusCode::OK,
        json!({ "success": true, "timestamp": now_iso() }),
    )
}

fn handle(sheets: &SheetRegistry, body: &[u8], query: &str) -> HttpResponse {
    match parse_payload(body, query).and_then(|data| dispatch(sheets, &data)) {
        Ok(result) => cors_json(StatusCode::OK, result),
        Err(err) => {
            error!("form submission failed: {err}");
            cors_json(
                StatusCode::OK,
                json!({ "success": false, "error": err, "timestamp": now_iso() }),
            )
        }
    }
}

/// Extracts the submitted fields as a flat JSON object.
///
/// Order mirrors the delivery styles: a non-empty body is tried as JSON
/// first and re-parsed as URL-encoded pairs when that fails; with no body,
/// the query string is parsed the same URL-encoded way; with neither, the
/// request carried nothing.
pub(crate) fn parse_payload(body: &[u8], query: &str) -> Result<Map<String, Value>, String> {
    if !body.is_empty() {
        if let Ok(Value::Object(data)) = serde_json::from_slice::<Value>(body) {
            return Ok(data);
        }
        let text = std::str::from_utf8(body)
            .map_err(|_| "Request body is not valid UTF-8".to_string())?;
        return parse_form_pairs(text);
    }
    if !query.is_empty() {
        return parse_form_pairs(query);
    }
    Err("No data received".to_string())
}

/// Parses `key=value&...` text, decoding percent-escapes and treating a
/// literal `+` as a space.
fn parse_form_pairs(text: &str) -> Result<Map<String, Value>, String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(text)
        .map_err(|e| format!("Malformed form data: {e}"))?;
    let mut data = Map::new();
    for (key, value) in pairs {
        data.insert(key, Value::String(value));
    }
    Ok(data)
}

/// Routes a parsed payload to its handler. A truthy `test` field wins over
/// `formType` and echoes the payload back for connectivity diagnostics.
pub(crate) fn dispatch(
    sheets: &SheetRegistry,
    data: &Map<String, Value>,
) -> Result<Value, String> {
    if data.get("test").is_some_and(is_truthy) {
        info!("diagnostic test request received");
        return Ok(json!({
            "success": true,
            "message": "Test successful - forms endpoint is reachable",
            "timestamp": now_iso(),
            "receivedData": Value::Object(data.clone()),
        }));
    }

    match data.get("formType").and_then(Value::as_str) {
        Some("contact") => contact::append(&sheets.contact(), data),
        Some("project-inquiry") => inquiry::append(&sheets.project_inquiry(), data),
        Some("feedback") => feedback::append(&sheets.feedback(), data),
        other => Err(format!(
            "Invalid or missing form type. Received: {}",
            describe_form_type(other, data.get("formType"))
        )),
    }
}

fn describe_form_type(as_str: Option<&str>, raw: Option<&Value>) -> String {
    match (as_str, raw) {
        (Some(s), _) => s.to_string(),
        (None, Some(v)) => v.to_string(),
        (None, None) => "(none)".to_string(),
    }
}

/// JS-style truthiness for the `test` field, which arrives as `true` from
/// JSON clients and as a non-empty string from form-encoded ones.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    }
}
