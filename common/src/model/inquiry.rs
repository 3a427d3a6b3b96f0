use serde::{Deserialize, Serialize};

/// Project inquiry payload. Required fields: name, a valid email, timeline,
/// budget. The list-valued fields are joined to comma-separated strings when
/// the row is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
    pub primary_service: String,
    pub timeline: String,
    pub budget: String,
    pub team_size: String,
    pub additional_technologies: Vec<String>,
    pub additional_services: Vec<String>,
    pub additional_requirements: String,
    pub custom_technology: String,
}
