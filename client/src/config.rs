//! Deployment endpoints: environment variables with in-source fallback
//! defaults. The defaults point at a local development backend; deployments
//! override them through the environment.

use std::env;

pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:8080/api/forms";
pub const DEFAULT_VALUES_URL: &str = "http://127.0.0.1:8080/api/feedbacks/values";
pub const DEFAULT_READ_API_KEY: &str = "dev-read-key-7f3a";

/// URL the transport client submits forms to.
pub fn endpoint_url() -> String {
    env::var("FORMS_ENDPOINT_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT_URL.to_string())
}

/// URL the feedback reader pulls sheet values from.
pub fn values_url() -> String {
    env::var("FEEDBACKS_VALUES_URL").unwrap_or_else(|_| DEFAULT_VALUES_URL.to_string())
}

/// Key accepted by the values endpoint.
pub fn read_api_key() -> String {
    env::var("SHEETS_READ_API_KEY").unwrap_or_else(|_| DEFAULT_READ_API_KEY.to_string())
}
