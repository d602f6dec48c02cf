use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a display name.
const NAME_MAX_LEN: u64 = 128;

/// Result type returned by the auth form helpers.
pub type AuthFormResult<T> = Result<T, AuthFormError>;

/// Errors that can occur while processing auth forms.
#[derive(Debug, Error)]
pub enum AuthFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided display name is empty after sanitization.
    #[error("name cannot be empty")]
    EmptyName,
}

/// Credential pair extracted from a sign-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Form payload emitted by the sign-in dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    /// Email entered by the user.
    #[validate(length(min = 1))]
    pub email: String,
    /// Password entered by the user.
    #[validate(length(min = 1))]
    pub password: String,
}

impl SignInForm {
    /// Validates the payload into a credential pair. The password is
    /// passed through untouched; only the email is trimmed.
    pub fn into_credentials(self) -> AuthFormResult<Credentials> {
        self.validate()?;
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password,
        })
    }
}

/// Form payload emitted by the sign-up dialog.
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    /// Email for the new account.
    #[validate(email)]
    pub email: String,
    /// Password for the new account. Never stored; sign-up always
    /// succeeds regardless of its value.
    #[validate(length(min = 1))]
    pub password: String,
    /// Display name for the new account.
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}

/// Registration details extracted from a sign-up form.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub name: String,
}

impl SignUpForm {
    /// Validates and sanitizes the payload into registration details.
    pub fn into_registration(self) -> AuthFormResult<Registration> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(AuthFormError::EmptyName);
        }

        Ok(Registration {
            email: self.email.trim().to_lowercase(),
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_form_trims_email_only() {
        let form = SignInForm {
            email: " demo@example.com ".to_string(),
            password: " demo123 ".to_string(),
        };
        let credentials = form.into_credentials().expect("expected success");
        assert_eq!(credentials.email, "demo@example.com");
        assert_eq!(credentials.password, " demo123 ");
    }

    #[test]
    fn sign_in_form_rejects_empty_fields() {
        let form = SignInForm {
            email: String::new(),
            password: "x".to_string(),
        };
        assert!(matches!(
            form.into_credentials(),
            Err(AuthFormError::Validation(_))
        ));
    }

    #[test]
    fn sign_up_form_normalizes_email_and_name() {
        let form = SignUpForm {
            email: "New.User@Example.COM".to_string(),
            password: "secret".to_string(),
            name: "  New   User ".to_string(),
        };
        let registration = form.into_registration().expect("expected success");
        assert_eq!(registration.email, "new.user@example.com");
        assert_eq!(registration.name, "New User");
    }

    #[test]
    fn sign_up_form_rejects_invalid_email() {
        let form = SignUpForm {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            name: "User".to_string(),
        };
        assert!(matches!(
            form.into_registration(),
            Err(AuthFormError::Validation(_))
        ));
    }

    #[test]
    fn sign_up_form_rejects_whitespace_name() {
        let form = SignUpForm {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
            name: "   ".to_string(),
        };
        assert!(matches!(
            form.into_registration(),
            Err(AuthFormError::EmptyName)
        ));
    }
}
