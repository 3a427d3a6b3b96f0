use log::info;
use serde_json::{json, Map, Value};

use crate::services::now_iso;
use crate::sheets::Sheet;

use super::{field, flatten_list};

const HEADER: [&str; 15] = [
    "Timestamp",
    "Name",
    "Email",
    "Phone",
    "Company",
    "Website",
    "Primary Service",
    "Project Timeline",
    "Budget Range",
    "Team Size",
    "Additional Technologies",
    "Additional Services",
    "Additional Requirements",
    "Custom Technology",
    "Source",
];
const SOURCE: &str = "Website Project Inquiry";

/// Appends one project inquiry to its sheet. List-valued fields arrive as
/// JSON arrays or as already-flattened comma strings and are normalized to
/// `", "`-joined text either way.
pub(super) fn append(sheet: &Sheet, data: &Map<String, Value>) -> Result<Value, String> {
    let row = build_row(data);
    let row_added = sheet
        .append(&HEADER, &row)
        .map_err(|e| format!("Failed to save project inquiry: {e}"))?;

    info!("project inquiry appended, sheet now holds {row_added} rows");
    Ok(json!({
        "success": true,
        "message": "Project inquiry submitted successfully",
        "formType": "project-inquiry",
        "rowAdded": row_added,
        "timestamp": now_iso(),
    }))
}

fn build_row(data: &Map<String, Value>) -> Vec<String> {
    vec![
        now_iso(),
        field(data, "name"),
        field(data, "email"),
        field(data, "phone"),
        field(data, "company"),
        field(data, "website"),
        field(data, "primaryService"),
        field(data, "timeline"),
        field(data, "budget"),
        field(data, "teamSize"),
        flatten_list(data, "additionalTechnologies"),
        flatten_list(data, "additionalServices"),
        field(data, "additionalRequirements"),
        field(data, "customTechnology"),
        SOURCE.to_string(),
    ]
}
