//! Display-date resolution for interview cards.

use api::Feedback;
use chrono::{DateTime, Utc};

/// The timestamp a card displays: the feedback's, else the interview's own,
/// else the moment of render.
pub fn card_timestamp(
    feedback: Option<&Feedback>,
    created_at: Option<DateTime<Utc>>,
) -> DateTime<Utc> {
    feedback
        .map(|f| f.created_at)
        .or(created_at)
        .unwrap_or_else(Utc::now)
}

/// Format as `MM D, YYYY`: two-digit month, unpadded day, four-digit year.
pub fn format_card_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%m %-d, %Y").to_string()
}
