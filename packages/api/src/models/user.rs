//! User and session records.
//!
//! [`UserInfo`] is the client-safe projection of an account: it carries only
//! what the UI needs to greet the user and never any credential material.
//! [`Session`] is what a successful [`crate::auth::AuthClient::authenticate`]
//! call hands back.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// The user's name, falling back to their email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// An authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let user = UserInfo {
            id: "u1".to_string(),
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
        };
        assert_eq!(user.display_name(), "Alice");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u2".to_string(),
            email: "bob@example.com".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "bob@example.com");
    }
}
