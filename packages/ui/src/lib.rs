//! This crate contains all shared UI for PrepDeck.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");
pub const LOGO: Asset = asset!("/assets/logo.svg");

mod auth;
pub use auth::{use_auth, use_auth_client, AuthProvider, AuthState, SharedAuthClient};

mod auth_form;
pub use auth_form::AuthForm;

mod form_field;
pub use form_field::{FormField, InputKind};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, ToastStack};

mod interview_card;
pub use interview_card::{normalize_interview_type, InterviewCard};

mod covers;
pub use covers::{random_interview_cover, INTERVIEW_COVERS};

mod card_date;
pub use card_date::{card_timestamp, format_card_date};
