//! Approved-feedback reader behind the testimonials display.
//!
//! One-shot fetch of the feedback sheet values, filtered down to rows an
//! admin has approved. Columns are resolved by header name against the
//! sheet's first row rather than assumed by position, so reordering or
//! inserting a column cannot silently shift what gets displayed. Every
//! failure degrades to an empty list; missing testimonials are an expected,
//! non-fatal state for the caller.

use log::{info, warn};
use serde::Deserialize;

use crate::config;

/// One approved feedback row, parsed from the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ApprovedFeedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub project: String,
    pub rating: u8,
    pub feedback: String,
    pub timestamp: String,
    pub approved: String,
}

/// Display shape the testimonial renderer expects, with fixed defaults
/// substituted for blank optional fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: String,
    pub image: String,
    pub rating: u8,
    pub feedback: String,
    pub project: String,
    pub location: String,
}

#[derive(Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Column indexes resolved from the sheet's header row.
struct FeedbackColumns {
    timestamp: Option<usize>,
    name: usize,
    email: usize,
    company: Option<usize>,
    position: Option<usize>,
    project: Option<usize>,
    rating: Option<usize>,
    feedback: usize,
    approved: usize,
}

impl FeedbackColumns {
    /// Maps the header row to column indexes. Name, Email, Feedback, and
    /// Approved must be present; the rest are optional display data.
    fn from_header(header: &[String]) -> Result<Self, String> {
        let find = |title: &str| {
            header
                .iter()
                .position(|cell| cell.trim().eq_ignore_ascii_case(title))
        };
        let required = |title: &str| {
            find(title).ok_or_else(|| format!("feedback sheet header is missing '{title}'"))
        };

        Ok(Self {
            timestamp: find("Timestamp"),
            name: required("Name")?,
            email: required("Email")?,
            company: find("Company"),
            position: find("Position"),
            project: find("Project Type"),
            rating: find("Rating"),
            feedback: required("Feedback")?,
            approved: required("Approved")?,
        })
    }
}

/// Fetches feedback sheet values and filters them to approved rows.
pub struct FeedbackReader {
    values_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl FeedbackReader {
    pub fn new(values_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            values_url: values_url.into(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::values_url(), config::read_api_key())
    }

    /// All approved feedback rows, or an empty list on any failure.
    pub async fn fetch_approved(&self) -> Vec<ApprovedFeedback> {
        match self.fetch_values().await {
            Ok(values) => {
                let feedbacks = parse_approved(&values);
                info!("loaded {} approved feedbacks", feedbacks.len());
                feedbacks
            }
            Err(err) => {
                warn!("feedback fetch failed, showing none: {err}");
                Vec::new()
            }
        }
    }

    /// Diagnostic: reports the total row count or the failure text.
    pub async fn test_connection(&self) -> Result<String, String> {
        let values = self.fetch_values().await?;
        Ok(format!("Successfully connected, found {} rows", values.len()))
    }

    async fn fetch_values(&self) -> Result<Vec<Vec<String>>, String> {
        let response = self
            .http
            .get(&self.values_url)
            .query(&[("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("HTTP error, status {}", response.status()));
        }
        let body: ValuesResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(body.values)
    }
}

/// Parses all values into approved feedbacks: header row mapped to column
/// indexes, every remaining row filtered and converted.
pub(crate) fn parse_approved(values: &[Vec<String>]) -> Vec<ApprovedFeedback> {
    let Some(header) = values.first() else {
        return Vec::new();
    };
    let columns = match FeedbackColumns::from_header(header) {
        Ok(columns) => columns,
        Err(err) => {
            warn!("{err}");
            return Vec::new();
        }
    };

    values
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, row)| parse_row(row, index, &columns))
        .collect()
}

fn parse_row(row: &[String], index: usize, columns: &FeedbackColumns) -> Option<ApprovedFeedback> {
    let cell = |idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    };

    // Name and email are the minimum a testimonial can render with.
    let name = cell(Some(columns.name));
    let email = cell(Some(columns.email));
    if name.is_empty() || email.is_empty() {
        return None;
    }

    let approved = cell(Some(columns.approved)).trim().to_lowercase();
    if approved != "y" && approved != "yes" {
        return None;
    }

    Some(ApprovedFeedback {
        id: format!("feedback-{index}"),
        name: name.to_string(),
        email: email.to_string(),
        company: cell(columns.company).to_string(),
        position: cell(columns.position).to_string(),
        project: cell(columns.project).to_string(),
        rating: cell(columns.rating).trim().parse().unwrap_or(5),
        feedback: cell(Some(columns.feedback)).to_string(),
        timestamp: cell(columns.timestamp).to_string(),
        approved: cell(Some(columns.approved)).to_string(),
    })
}

/// Maps a parsed feedback into the testimonial display shape, substituting
/// fixed defaults for blank optional fields.
pub fn convert(feedback: &ApprovedFeedback) -> Testimonial {
    Testimonial {
        id: feedback.id.clone(),
        name: feedback.name.clone(),
        position: default_if_blank(&feedback.position, "Client"),
        company: default_if_blank(&feedback.company, "Valued Client"),
        image: avatar_url(&feedback.name),
        rating: feedback.rating,
        feedback: feedback.feedback.clone(),
        project: default_if_blank(&feedback.project, "Service"),
        location: "Client Location".to_string(),
    }
}

fn default_if_blank(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Deterministic placeholder avatar derived from the name, pinned to the
/// avatar set size.
fn avatar_url(name: &str) -> String {
    let hash = name.chars().fold(0i32, |acc, c| {
        acc.wrapping_shl(5).wrapping_sub(acc).wrapping_add(c as i32)
    });
    format!("https://i.pravatar.cc/150?img={}", (hash % 70).abs() + 1)
}
