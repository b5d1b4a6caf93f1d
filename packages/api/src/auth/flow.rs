//! # The submission flow
//!
//! [`submit_credentials`] reduces one form submission to a single
//! [`SubmitOutcome`]:
//!
//! - invalid input is rejected before the client is ever called, with one
//!   message per offending field;
//! - a successful authentication yields the mode's success notice and
//!   redirect target along with the new session;
//! - a failed authentication yields a single notice built from the failure's
//!   message. Failure is terminal for the attempt; the form stays editable
//!   and the user resubmits by hand.

use super::{
    AuthClient, AuthMode, AuthRequest, CredentialInput, FieldErrors, HOME_PATH, SIGN_IN_PATH,
};
use crate::models::Session;

/// The result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; no authentication was attempted.
    Rejected(FieldErrors),
    /// Authentication succeeded.
    Completed {
        notice: String,
        redirect: &'static str,
        session: Session,
    },
    /// Authentication failed.
    Failed { notice: String },
}

/// Validate `input` for `mode` and, if acceptable, authenticate it.
pub async fn submit_credentials(
    mode: AuthMode,
    input: &CredentialInput,
    client: &dyn AuthClient,
) -> SubmitOutcome {
    let request = match AuthRequest::validate(mode, input) {
        Ok(request) => request,
        Err(errors) => return SubmitOutcome::Rejected(errors),
    };

    match client.authenticate(request).await {
        Ok(session) => {
            let (notice, redirect) = match mode {
                AuthMode::SignUp => (
                    "Account Created Successfully, Please Sign In.",
                    SIGN_IN_PATH,
                ),
                AuthMode::SignIn => ("Sign In Successfully!", HOME_PATH),
            };
            SubmitOutcome::Completed {
                notice: notice.to_string(),
                redirect,
                session,
            }
        }
        Err(err) => SubmitOutcome::Failed {
            notice: format!("Authentication failed: {}", err.user_message()),
        },
    }
}
