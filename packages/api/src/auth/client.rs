//! # The authentication client boundary
//!
//! [`AuthClient`] is the single seam between the credential form and
//! whatever actually authenticates the user. The form only ever awaits
//! [`AuthClient::authenticate`]; swapping the simulated client for a real
//! network client is a one-line change at the provider.
//!
//! [`SimulatedAuthClient`] is the current stand-in: it sleeps for a fixed
//! delay and then succeeds, fabricating a session from the request. Tests
//! inject their own implementations to script success and failure.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::AuthRequest;
use crate::models::{Session, UserInfo};

/// Why an authentication attempt failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// The server rejected the credentials and said why.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// Failed for no stated reason.
    #[error("something went wrong")]
    Unknown,
}

impl AuthError {
    /// The message to surface to the user, with a generic fallback when the
    /// failure carries none.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected(message) | AuthError::Network(message) => message.clone(),
            AuthError::Unknown => "Something went wrong.".to_string(),
        }
    }
}

/// An asynchronous authentication operation.
///
/// Futures returned here run on the Dioxus local executor, so `Send` is not
/// required.
#[async_trait(?Send)]
pub trait AuthClient {
    async fn authenticate(&self, request: AuthRequest) -> Result<Session, AuthError>;
}

/// Fixed-delay stand-in for a real authentication backend.
#[derive(Debug, Clone)]
pub struct SimulatedAuthClient {
    pub delay: Duration,
}

impl Default for SimulatedAuthClient {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
        }
    }
}

#[async_trait(?Send)]
impl AuthClient for SimulatedAuthClient {
    async fn authenticate(&self, request: AuthRequest) -> Result<Session, AuthError> {
        sleep(self.delay).await;

        let user = match request {
            AuthRequest::SignIn(input) => UserInfo {
                id: format!("sim:{}", input.email),
                email: input.email,
                name: None,
            },
            AuthRequest::SignUp(input) => UserInfo {
                id: format!("sim:{}", input.email),
                email: input.email,
                name: Some(input.name),
            },
        };
        Ok(Session { user })
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SignUpInput;

    #[tokio::test]
    async fn test_simulated_client_fabricates_session() {
        let client = SimulatedAuthClient {
            delay: Duration::from_millis(1),
        };
        let request = AuthRequest::SignUp(SignUpInput {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        });

        let session = client.authenticate(request).await.unwrap();
        assert_eq!(session.user.email, "alice@example.com");
        assert_eq!(session.user.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_user_message_falls_back_when_unstated() {
        assert_eq!(
            AuthError::Rejected("Invalid credentials".to_string()).user_message(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::Unknown.user_message(), "Something went wrong.");
    }
}
