//! Session user.

use serde::{Deserialize, Serialize};

use super::Email;

/// The single allow-listed admin address (compared case-insensitively).
pub const ADMIN_EMAIL: &str = "shauryave1717@gmail.com";

/// The logged-in shopper.
///
/// `is_admin` is derived at login time from the email and persisted with
/// it; no credential is ever verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Build the session user for `email`.
    #[must_use]
    pub fn for_email(email: &Email) -> Self {
        Self {
            email: email.as_str().to_owned(),
            is_admin: email.matches(ADMIN_EMAIL),
        }
    }

    /// Label shown in navigation; the raw email is never displayed.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        if self.is_admin {
            "Authority Console"
        } else {
            "Guest Account"
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::for_email(&Email::parse(email).unwrap())
    }

    #[test]
    fn test_admin_email_is_case_insensitive() {
        assert!(user("shauryave1717@gmail.com").is_admin);
        assert!(user("ShauryaVe1717@GMAIL.com").is_admin);
    }

    #[test]
    fn test_other_emails_are_not_admin() {
        assert!(!user("guest@example.com").is_admin);
        assert!(!user("shauryave1717@gmail.co").is_admin);
        assert!(!user("xshauryave1717@gmail.com").is_admin);
    }

    #[test]
    fn test_email_kept_as_entered() {
        assert_eq!(user("Guest@Example.com").email, "Guest@Example.com");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(user(ADMIN_EMAIL).display_name(), "Authority Console");
        assert_eq!(user("a@b.c").display_name(), "Guest Account");
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(user("a@b.c")).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c", "isAdmin": false}));
    }
}
