//! # Authentication — mode, display copy, input validation, client, flow
//!
//! The sign-in and sign-up screens share one form whose behavior is driven
//! entirely by [`AuthMode`]:
//!
//! - [`AuthMode::copy`] returns the fixed lookup table of display strings
//!   (title, prompt, link, submit label) for the mode.
//! - [`AuthRequest::validate`] turns raw keystrokes into a validated,
//!   mode-tagged request or a set of per-field errors.
//! - [`AuthClient::authenticate`] is the pluggable network boundary;
//!   [`SimulatedAuthClient`] is the fixed-delay stand-in used until a real
//!   backend client exists.
//! - [`submit_credentials`] ties the three together and reduces a submission
//!   to a single [`SubmitOutcome`] the form can act on.

mod client;
mod flow;
mod input;

use serde::{Deserialize, Serialize};

pub use client::{AuthClient, AuthError, SimulatedAuthClient};
pub use flow::{submit_credentials, SubmitOutcome};
pub use input::{AuthRequest, CredentialInput, FieldErrors, SignInInput, SignUpInput};

/// Route paths shared between the auth flow and the router.
pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";
pub const SIGN_UP_PATH: &str = "/sign-up";

/// Which variant of the credential form is being shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Display strings for one [`AuthMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCopy {
    pub title: &'static str,
    pub prompt: &'static str,
    pub link_text: &'static str,
    pub link_href: &'static str,
    pub submit_label: &'static str,
}

impl AuthMode {
    /// The fixed copy table for the form: every display string is a pure
    /// function of the mode.
    pub fn copy(self) -> AuthCopy {
        match self {
            AuthMode::SignIn => AuthCopy {
                title: "Sign In",
                prompt: "No Account Yet?",
                link_text: "Sign up",
                link_href: SIGN_UP_PATH,
                submit_label: "Sign In",
            },
            AuthMode::SignUp => AuthCopy {
                title: "Create Account",
                prompt: "Have an account Already?",
                link_text: "Sign In",
                link_href: SIGN_IN_PATH,
                submit_label: "Create an Account",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_copy() {
        let copy = AuthMode::SignIn.copy();
        assert_eq!(copy.title, "Sign In");
        assert_eq!(copy.prompt, "No Account Yet?");
        assert_eq!(copy.link_text, "Sign up");
        assert_eq!(copy.link_href, "/sign-up");
        assert_eq!(copy.submit_label, "Sign In");
    }

    #[test]
    fn test_sign_up_copy() {
        let copy = AuthMode::SignUp.copy();
        assert_eq!(copy.title, "Create Account");
        assert_eq!(copy.prompt, "Have an account Already?");
        assert_eq!(copy.link_text, "Sign In");
        assert_eq!(copy.link_href, "/sign-in");
        assert_eq!(copy.submit_label, "Create an Account");
    }

    #[test]
    fn test_mode_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&AuthMode::SignIn).unwrap(),
            "\"sign-in\""
        );
        assert_eq!(
            serde_json::to_string(&AuthMode::SignUp).unwrap(),
            "\"sign-up\""
        );
    }
}
