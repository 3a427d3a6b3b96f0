use serde::{Deserialize, Serialize};

/// JSON body returned by the forms endpoint for every request, success or
/// failure. `row_added` is the sheet's new total row count after an append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_added: Option<u64>,
}

impl FormResponse {
    pub fn failure(error: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            timestamp: timestamp.into(),
            ..Self::default()
        }
    }

    pub fn appended(
        form_type: &str,
        message: &str,
        row_added: u64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            timestamp: timestamp.into(),
            form_type: Some(form_type.to_string()),
            row_added: Some(row_added),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_omits_optional_fields() {
        let response = FormResponse::failure("No data received", "2026-01-01T00:00:00.000Z");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "No data received");
        assert!(json.get("message").is_none());
        assert!(json.get("rowAdded").is_none());
    }

    #[test]
    fn appended_carries_row_count() {
        let response =
            FormResponse::appended("contact", "Contact form submitted successfully", 2, "t");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["formType"], "contact");
        assert_eq!(json["rowAdded"], 2);
    }
}
