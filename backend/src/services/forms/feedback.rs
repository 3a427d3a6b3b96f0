use log::info;
use serde_json::{json, Map, Value};

use crate::services::now_iso;
use crate::sheets::Sheet;

use super::{field, rating};

pub(crate) const HEADER: [&str; 11] = [
    "Timestamp",
    "Name",
    "Email",
    "Company",
    "Position",
    "Project Type",
    "Rating",
    "Feedback",
    "Source",
    "Submitter Type",
    "Approved",
];
const SOURCE: &str = "Website Feedback Form";

/// Appends one feedback submission. The Approved column is always written
/// as "N" regardless of input; only an out-of-band admin edit approves a
/// feedback for display.
pub(super) fn append(sheet: &Sheet, data: &Map<String, Value>) -> Result<Value, String> {
    let row = build_row(data);
    let row_added = sheet
        .append(&HEADER, &row)
        .map_err(|e| format!("Failed to save feedback: {e}"))?;

    info!("feedback appended, sheet now holds {row_added} rows");
    Ok(json!({
        "success": true,
        "message": "Feedback submitted successfully",
        "formType": "feedback",
        "rowAdded": row_added,
        "timestamp": now_iso(),
    }))
}

fn build_row(data: &Map<String, Value>) -> Vec<String> {
    let submitter_type = match field(data, "submitterType") {
        s if s.is_empty() => "Client".to_string(),
        s => s,
    };
    vec![
        now_iso(),
        field(data, "name"),
        field(data, "email"),
        field(data, "company"),
        field(data, "position"),
        field(data, "project"),
        rating(data, "rating").to_string(),
        field(data, "feedback"),
        SOURCE.to_string(),
        submitter_type,
        "N".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(json: &str) -> Map<String, Value> {
        serde_json::from_str::<Value>(json)
            .unwrap()
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn approved_is_forced_to_n_on_insert() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = Sheet::new(dir.path().join("feedback.csv"));
        let payload = data(
            r#"{
                "formType": "feedback",
                "name": "A",
                "email": "a@b.co",
                "feedback": "Great",
                "approved": "Y"
            }"#,
        );

        append(&sheet, &payload).unwrap();
        let rows = sheet.rows().unwrap();
        assert_eq!(rows[1][10], "N");
    }

    #[test]
    fn rating_defaults_to_five_and_submitter_type_to_client() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = Sheet::new(dir.path().join("feedback.csv"));
        let payload = data(
            r#"{"formType":"feedback","name":"A","email":"a@b.co","feedback":"Great","rating":"zero stars"}"#,
        );

        append(&sheet, &payload).unwrap();
        let rows = sheet.rows().unwrap();
        assert_eq!(rows[1][6], "5");
        assert_eq!(rows[1][9], "Client");
    }

    #[test]
    fn submitter_type_is_preserved_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = Sheet::new(dir.path().join("feedback.csv"));
        let payload = data(
            r#"{"formType":"feedback","name":"A","email":"a@b.co","feedback":"ok","rating":4,"submitterType":"Employee"}"#,
        );

        append(&sheet, &payload).unwrap();
        let rows = sheet.rows().unwrap();
        assert_eq!(rows[1][6], "4");
        assert_eq!(rows[1][9], "Employee");
    }
}
