//! # Interview summary card
//!
//! A fixed-size card for one interview record: a normalized type badge and a
//! random cover image. Pure function of its props; absent optional fields
//! degrade to defaults and nothing here can fail to render.

use api::{Feedback, Interview};
use dioxus::prelude::*;

use crate::card_date::{card_timestamp, format_card_date};
use crate::covers::random_interview_cover;
use crate::UI_CSS;

/// Badge label for an interview type: anything containing "mix" (any case)
/// collapses to "Mixed", everything else passes through verbatim.
pub fn normalize_interview_type(kind: &str) -> &str {
    if kind.to_ascii_lowercase().contains("mix") {
        "Mixed"
    } else {
        kind
    }
}

#[component]
pub fn InterviewCard(interview: Interview, feedback: Option<Feedback>) -> Element {
    let badge = normalize_interview_type(&interview.r#type).to_string();
    let cover = random_interview_cover();
    // TODO: render the date once the card grows its detail footer.
    let _date = format_card_date(card_timestamp(feedback.as_ref(), interview.created_at));

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div { class: "card-border interview-card",
            div { class: "card-interview",
                div { class: "interview-badge",
                    p { class: "badge-text", "{badge}" }
                }
                img {
                    class: "cover-image",
                    src: "{cover}",
                    alt: "cover image",
                    width: "90",
                    height: "90",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_variants_collapse_to_mixed() {
        assert_eq!(normalize_interview_type("Mixed"), "Mixed");
        assert_eq!(normalize_interview_type("mix"), "Mixed");
        assert_eq!(normalize_interview_type("MIXED-style"), "Mixed");
        assert_eq!(normalize_interview_type("remix"), "Mixed");
    }

    #[test]
    fn test_other_types_pass_through_verbatim() {
        assert_eq!(normalize_interview_type("Technical"), "Technical");
        assert_eq!(normalize_interview_type("Behavioral"), "Behavioral");
        assert_eq!(normalize_interview_type(""), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for kind in ["Mixed", "mix", "Technical"] {
            let once = normalize_interview_type(kind);
            assert_eq!(normalize_interview_type(once), once);
        }
    }
}
