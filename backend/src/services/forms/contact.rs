use log::info;
use serde_json::{json, Map, Value};

use crate::services::now_iso;
use crate::sheets::Sheet;

use super::field;

const HEADER: [&str; 7] = [
    "Timestamp",
    "Name",
    "Email",
    "Phone",
    "Company",
    "Message",
    "Source",
];
const SOURCE: &str = "Website Contact Form";

/// Appends one contact submission to the contact sheet and returns the
/// success payload carrying the new row count.
pub(super) fn append(sheet: &Sheet, data: &Map<String, Value>) -> Result<Value, String> {
    let row = build_row(data);
    let row_added = sheet
        .append(&HEADER, &row)
        .map_err(|e| format!("Failed to save contact form: {e}"))?;

    info!("contact form appended, sheet now holds {row_added} rows");
    Ok(json!({
        "success": true,
        "message": "Contact form submitted successfully",
        "formType": "contact",
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
        field(data, "message"),
        SOURCE.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_contact_append_yields_two_rows() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = Sheet::new(dir.path().join("contact.csv"));
        let data = serde_json::from_str::<Value>(
            r#"{"formType":"contact","name":"John Doe","email":"john@company.com","message":"Hi"}"#,
        )
        .unwrap()
        .as_object()
        .cloned()
        .unwrap();

        let result = append(&sheet, &data).unwrap();
        assert_eq!(result["rowAdded"], 2);

        let rows = sheet.rows().unwrap();
        assert_eq!(rows[0], HEADER.to_vec());
        assert_eq!(rows[1][1], "John Doe");
        // missing fields default to empty strings
        assert_eq!(rows[1][3], "");
        assert_eq!(rows[1][6], "Website Contact Form");
        // server assigns the timestamp in column 1
        assert!(!rows[1][0].is_empty());
    }
}
