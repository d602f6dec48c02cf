use serde::{Deserialize, Serialize};

use crate::domain::new_id;

/// Account signed into the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier of the user.
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl User {
    /// Build a freshly registered user with a placeholder avatar derived
    /// deterministically from the email address.
    pub fn register(email: impl Into<String>, name: impl Into<String>) -> Self {
        let email = email.into();
        let avatar = placeholder_avatar(&email);
        Self {
            id: new_id(),
            email,
            name: name.into(),
            avatar,
        }
    }
}

/// Deterministic placeholder avatar URL for a given email.
pub fn placeholder_avatar(email: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_derives_avatar_from_email() {
        let user = User::register("a@example.com", "A");
        assert!(user.avatar.ends_with("seed=a@example.com"));
        assert_eq!(user.email, "a@example.com");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn register_issues_distinct_ids() {
        let a = User::register("a@example.com", "A");
        let b = User::register("a@example.com", "A");
        assert_ne!(a.id, b.id);
    }
}
