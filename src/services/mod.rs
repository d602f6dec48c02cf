use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod brands;
pub mod dashboard;
pub mod products;

/// Errors surfaced to the presentation layer by the service functions.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The sign-in email/password pair did not match the demo account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// A form payload failed validation or sanitization.
    #[error("form error: {0}")]
    Form(String),
    /// The repository failed while reading or persisting state.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type returned by the service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
