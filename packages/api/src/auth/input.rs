//! # Credential input and validation
//!
//! [`CredentialInput`] is the ephemeral name/email/password tuple the form
//! accumulates from keystrokes. [`AuthRequest::validate`] checks it against
//! the rules for the given mode and, on success, produces a mode-tagged
//! request: the `name` requirement only exists for sign-up, so rather than
//! one struct with an optional field there are two variants.
//! [`SignInInput`] has no name at all; [`SignUpInput`] requires one.
//!
//! Validation failures come back as [`FieldErrors`], one message per
//! offending field, and block submission before any client call is made.

use serde::{Deserialize, Serialize};

use super::AuthMode;

const NAME_TOO_SHORT: &str = "Name must be at least 3 characters.";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 3 characters.";

/// Raw form state, as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CredentialInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated sign-in credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Validated sign-up credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A validated authentication request, tagged by mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AuthRequest {
    SignIn(SignInInput),
    SignUp(SignUpInput),
}

/// Per-field validation errors. `None` means the field is acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

impl AuthRequest {
    /// Validate raw input against the rules for `mode`.
    ///
    /// The name is only consulted for sign-up; for sign-in it is ignored
    /// entirely, whatever its value.
    pub fn validate(mode: AuthMode, input: &CredentialInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        if mode == AuthMode::SignUp && input.name.chars().count() < 3 {
            errors.name = Some(NAME_TOO_SHORT.to_string());
        }
        if !is_valid_email(&input.email) {
            errors.email = Some(INVALID_EMAIL.to_string());
        }
        if input.password.chars().count() < 3 {
            errors.password = Some(PASSWORD_TOO_SHORT.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(match mode {
            AuthMode::SignIn => AuthRequest::SignIn(SignInInput {
                email: input.email.clone(),
                password: input.password.clone(),
            }),
            AuthMode::SignUp => AuthRequest::SignUp(SignUpInput {
                name: input.name.clone(),
                email: input.email.clone(),
                password: input.password.clone(),
            }),
        })
    }
}

/// `<local>@<domain>` with a dotted domain, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, password: &str) -> CredentialInput {
        CredentialInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_sign_up_requires_name_of_three_chars() {
        for name in ["", "a", "ab"] {
            let errors =
                AuthRequest::validate(AuthMode::SignUp, &input(name, "alice@example.com", "secret"))
                    .unwrap_err();
            assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
            assert!(errors.email.is_none());
            assert!(errors.password.is_none());
        }
    }

    #[test]
    fn test_sign_in_never_requires_name() {
        for name in ["", "a", "Alice"] {
            let request =
                AuthRequest::validate(AuthMode::SignIn, &input(name, "bob@example.com", "pass123"))
                    .unwrap();
            assert!(matches!(request, AuthRequest::SignIn(_)));
        }
    }

    #[test]
    fn test_invalid_emails_are_rejected() {
        for email in [
            "",
            "invalid",
            "no-at.example.com",
            "@example.com",
            "user@",
            "a@b@c.com",
            "user@nodot",
            "user@.com",
            "user@example.com ",
            "us er@example.com",
        ] {
            let errors =
                AuthRequest::validate(AuthMode::SignIn, &input("", email, "secret")).unwrap_err();
            assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL), "{email:?}");
        }
    }

    #[test]
    fn test_valid_emails_are_accepted() {
        for email in ["alice@example.com", "a.b+c@mail.example.org"] {
            assert!(
                AuthRequest::validate(AuthMode::SignIn, &input("", email, "secret")).is_ok(),
                "{email:?}"
            );
        }
    }

    #[test]
    fn test_short_password_is_rejected() {
        for password in ["", "a", "ab"] {
            let errors =
                AuthRequest::validate(AuthMode::SignIn, &input("", "alice@example.com", password))
                    .unwrap_err();
            assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
        }
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let errors =
            AuthRequest::validate(AuthMode::SignUp, &input("ab", "bad", "x")).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_valid_sign_up_produces_tagged_request() {
        let request = AuthRequest::validate(
            AuthMode::SignUp,
            &input("Alice", "alice@example.com", "secret"),
        )
        .unwrap();
        match request {
            AuthRequest::SignUp(sign_up) => {
                assert_eq!(sign_up.name, "Alice");
                assert_eq!(sign_up.email, "alice@example.com");
            }
            AuthRequest::SignIn(_) => panic!("expected a sign-up request"),
        }
    }
}
