//! # The credential form
//!
//! One component serves both the sign-in and the sign-up page. Everything
//! that differs between the two (display copy, which fields render, the
//! validation rules, the success notice, the redirect target) is a pure
//! function of [`AuthMode`].
//!
//! Submission runs through [`submit_credentials`]: invalid input comes back
//! as per-field errors and never reaches the authentication client; a
//! success shows a toast and navigates; a failure shows a toast and leaves
//! the form editable for another attempt. While a submission is pending the
//! submit control is disabled and re-entrant submits are ignored.

use api::auth::{submit_credentials, AuthMode, CredentialInput, FieldErrors, SubmitOutcome};
use dioxus::prelude::*;

use crate::auth::{navigate_to, use_auth, use_auth_client, AuthState};
use crate::components::{Button, ButtonVariant};
use crate::form_field::{FormField, InputKind};
use crate::toast::{push_toast, use_toasts, ToastLevel};
use crate::{LOGO, UI_CSS};

#[component]
pub fn AuthForm(mode: AuthMode) -> Element {
    let client = use_auth_client();
    let mut auth = use_auth();
    let mut toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let copy = mode.copy();
    let is_sign_in = mode == AuthMode::SignIn;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            // One attempt at a time.
            if submitting() {
                return;
            }
            submitting.set(true);
            errors.set(FieldErrors::default());

            let input = CredentialInput {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };

            match submit_credentials(mode, &input, client.client()).await {
                SubmitOutcome::Rejected(field_errors) => errors.set(field_errors),
                SubmitOutcome::Completed {
                    notice,
                    redirect,
                    session,
                } => {
                    if is_sign_in {
                        auth.set(AuthState {
                            session: Some(session),
                        });
                    }
                    push_toast(&mut toasts, ToastLevel::Success, &notice);
                    navigate_to(redirect);
                }
                SubmitOutcome::Failed { notice } => {
                    tracing::error!("authentication failed: {notice}");
                    push_toast(&mut toasts, ToastLevel::Error, &notice);
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        div { class: "card-border auth-card",
            div { class: "card auth-card-body",
                div { class: "auth-card-brand",
                    img { src: LOGO, alt: "PrepDeck logo", width: "38", height: "32" }
                    h2 { class: "auth-card-product", "PrepDeck" }
                }

                div { class: "auth-card-heading",
                    h3 { "{copy.title}" }
                    p { class: "auth-card-tagline", "Practice job interviews with AI" }
                }

                form { class: "auth-form", onsubmit: handle_submit,
                    if !is_sign_in {
                        FormField {
                            name: "name",
                            label: "Name",
                            placeholder: "Your Name",
                            kind: InputKind::Text,
                            value: name(),
                            error: errors().name,
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    FormField {
                        name: "email",
                        label: "Email",
                        placeholder: "Your email address",
                        kind: InputKind::Email,
                        value: email(),
                        error: errors().email,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FormField {
                        name: "password",
                        label: "Password",
                        placeholder: "Enter your password",
                        kind: InputKind::Password,
                        value: password(),
                        error: errors().password,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "auth-submit",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Please wait..." } else { "{copy.submit_label}" }
                    }
                }

                p { class: "auth-card-prompt",
                    "{copy.prompt} "
                    a { class: "auth-card-link", href: "{copy.link_href}", "{copy.link_text}" }
                }
            }
        }
    }
}
