//! Sign-in, sign-up and sign-out against the session store.
//!
//! Sign-in and sign-up simulate network latency with an injected delay
//! before resolving; they cannot be cancelled and always resolve or reject
//! exactly once. Tests pass [`Duration::ZERO`].

use std::time::Duration;

use tokio::time::sleep;

use crate::domain::user::User;
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::repository::seed;
use crate::repository::{SessionReader, SessionWriter};
use crate::services::{ServiceError, ServiceResult};

/// Email of the single accepted demo account.
pub const DEMO_EMAIL: &str = "demo@example.com";
/// Password of the single accepted demo account.
pub const DEMO_PASSWORD: &str = "demo123";
/// Latency applied by the production wiring.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Signs in with the fixed demo credential pair.
///
/// On a mismatch the session is left unchanged and
/// [`ServiceError::InvalidCredentials`] is returned.
pub async fn sign_in<R>(repo: &R, form: SignInForm, latency: Duration) -> ServiceResult<User>
where
    R: SessionWriter + ?Sized,
{
    let credentials = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    sleep(latency).await;

    if credentials.email != DEMO_EMAIL || credentials.password != DEMO_PASSWORD {
        log::warn!("rejected sign-in for `{}`", credentials.email);
        return Err(ServiceError::InvalidCredentials);
    }

    let user = seed::demo_user();
    repo.set_current_user(&user)?;
    log::info!("signed in `{}`", user.email);
    Ok(user)
}

/// Registers a new account and signs it in.
///
/// There is no user collection to check uniqueness against, so sign-up
/// always succeeds for a valid form; the avatar is derived
/// deterministically from the email.
pub async fn sign_up<R>(repo: &R, form: SignUpForm, latency: Duration) -> ServiceResult<User>
where
    R: SessionWriter + ?Sized,
{
    let registration = form
        .into_registration()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    sleep(latency).await;

    let user = User::register(registration.email, registration.name);
    repo.set_current_user(&user)?;
    log::info!("registered `{}`", user.email);
    Ok(user)
}

/// Clears the signed-in session. Idempotent; never fails beyond a
/// persistence fault.
pub fn sign_out<R>(repo: &R) -> ServiceResult<()>
where
    R: SessionWriter + ?Sized,
{
    repo.clear_current_user()?;
    Ok(())
}

/// The user whose session was last persisted, if any.
pub fn current_user<R>(repo: &R) -> ServiceResult<Option<User>>
where
    R: SessionReader + ?Sized,
{
    Ok(repo.current_user()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockSessionWriter;

    fn sign_in_form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_rejects_wrong_credentials_without_touching_session() {
        let mut repo = MockSessionWriter::new();
        repo.expect_set_current_user().never();

        let result = sign_in(&repo, sign_in_form(DEMO_EMAIL, "wrong"), Duration::ZERO).await;
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn sign_in_accepts_demo_credentials() {
        let mut repo = MockSessionWriter::new();
        repo.expect_set_current_user()
            .withf(|user| user.email == DEMO_EMAIL)
            .once()
            .returning(|_| Ok(()));

        let user = sign_in(&repo, sign_in_form(DEMO_EMAIL, DEMO_PASSWORD), Duration::ZERO)
            .await
            .expect("expected sign-in to succeed");
        assert_eq!(user, seed::demo_user());
    }

    #[tokio::test]
    async fn sign_up_registers_and_signs_in() {
        let mut repo = MockSessionWriter::new();
        repo.expect_set_current_user().once().returning(|_| Ok(()));

        let form = SignUpForm {
            email: "new@example.com".to_string(),
            password: "secret".to_string(),
            name: "New User".to_string(),
        };
        let user = sign_up(&repo, form, Duration::ZERO)
            .await
            .expect("expected sign-up to succeed");
        assert_eq!(user.email, "new@example.com");
        assert!(user.avatar.contains("new@example.com"));
    }
}
