//! Home page: the interview dashboard.

use api::Interview;
use dioxus::prelude::*;
use ui::{use_auth, InterviewCard};

use crate::Route;

/// Placeholder records until interviews come from a real data source.
fn sample_interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: "int-frontend-01".to_string(),
            user_id: "demo".to_string(),
            role: "Frontend Engineer".to_string(),
            r#type: "Technical".to_string(),
            techstack: vec!["React".to_string(), "TypeScript".to_string()],
            created_at: "2025-06-12T09:00:00Z".parse().ok(),
        },
        Interview {
            id: "int-fullstack-02".to_string(),
            user_id: "demo".to_string(),
            role: "Full-Stack Developer".to_string(),
            r#type: "Mixed".to_string(),
            techstack: vec!["Rust".to_string(), "Postgres".to_string()],
            created_at: "2025-07-03T15:30:00Z".parse().ok(),
        },
        Interview {
            id: "int-manager-03".to_string(),
            user_id: "demo".to_string(),
            role: "Engineering Manager".to_string(),
            r#type: "Behavioral".to_string(),
            techstack: vec![],
            created_at: None,
        },
    ]
}

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let greeting = auth()
        .session
        .map(|s| format!("Welcome back, {}", s.user.display_name()));

    rsx! {
        main { class: "home-page",
            header { class: "home-header",
                div { class: "home-brand",
                    img { src: ui::LOGO, alt: "PrepDeck logo", width: "38", height: "32" }
                    h1 { "PrepDeck" }
                }
                if let Some(greeting) = greeting {
                    p { class: "home-greeting", "{greeting}" }
                } else {
                    Link { class: "home-sign-in", to: Route::SignIn {}, "Sign In" }
                }
            }

            section { class: "home-interviews",
                h2 { "Your Interviews" }
                div { class: "interview-grid",
                    for interview in sample_interviews() {
                        InterviewCard { key: "{interview.id}", interview: interview.clone() }
                    }
                }
            }
        }
    }
}
