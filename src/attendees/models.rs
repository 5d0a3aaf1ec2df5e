use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A person registered for the event
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>, // None until the attendee checks in
}

/// One page of attendees as returned by the API
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AttendeePage {
    pub attendees: Vec<Attendee>,
    /// Result count across all pages
    pub total: u64,
}

/// Parameters of a single attendee listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeQuery {
    /// 0-based page offset
    pub page_index: u32,
    /// Free-text filter, only present when non-empty
    pub query: Option<String>,
}

impl AttendeeQuery {
    /// Query parameters in wire order
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("pageIndex", self.page_index.to_string())];
        if let Some(query) = &self.query {
            params.push(("query", query.clone()));
        }
        params
    }
}
