//! # Interview summary records
//!
//! [`Interview`] is the props/wire shape consumed by the interview card: it
//! uses the camelCase field names of the JSON contract (`interviewId`,
//! `userId`, `createdAt`, ...). `created_at` is optional; the card falls back
//! to the current time when it is absent and no feedback exists.
//!
//! [`Feedback`] is the future relation attached to an interview once the
//! user has completed it. It is injected as an optional value wherever it is
//! consumed, so a real data source can supply it without restructuring
//! anything. When present, its `created_at` takes precedence over the
//! interview's own timestamp for date display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one past or upcoming interview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    #[serde(rename = "interviewId")]
    pub id: String,
    pub user_id: String,
    pub role: String,
    pub r#type: String,
    pub techstack: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Feedback left on a completed interview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(rename = "feedbackId")]
    pub id: String,
    pub interview_id: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_wire_field_names() {
        let interview = Interview {
            id: "i1".to_string(),
            user_id: "u1".to_string(),
            role: "Frontend Engineer".to_string(),
            r#type: "Technical".to_string(),
            techstack: vec!["React".to_string(), "TypeScript".to_string()],
            created_at: "2024-03-05T10:00:00Z".parse().ok(),
        };
        let json = serde_json::to_value(&interview).unwrap();
        assert!(json.get("interviewId").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("type").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
