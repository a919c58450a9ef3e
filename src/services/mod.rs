//! Services orchestrating repository calls for contacts and their images.
//!
//! Every function is synchronous and generic over the repository traits it
//! needs, so the HTTP layer can run it on the blocking pool and tests can
//! drive it with mocks.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod contact_images;
pub mod contacts;

/// Typed failure of a service operation. The HTTP layer maps each variant to
/// exactly one status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed validation; carries every message found.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid argument: {0}")]
    TypeConstraint(String),

    #[error("{0}")]
    NotFound(String),

    /// The 10-image cap would be exceeded.
    #[error("{0}")]
    LimitExceeded(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(messages) => ServiceError::Validation(messages),
            other => ServiceError::Validation(vec![other.to_string()]),
        }
    }
}

pub(crate) fn contact_not_found(id: impl std::fmt::Display) -> ServiceError {
    ServiceError::NotFound(format!("Contact with ID {id} not found"))
}

pub(crate) fn image_not_found(
    contact_id: impl std::fmt::Display,
    image_id: impl std::fmt::Display,
) -> ServiceError {
    ServiceError::NotFound(format!(
        "Image with ID {image_id} not found for contact {contact_id}"
    ))
}
