//! Domain and service errors

use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

/// Store contract violations. None of these are caused by caller input.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User already has an identifier: {0}")]
    IdentifierAlreadyAssigned(Uuid),

    #[error("User identifier is required")]
    IdentifierRequired,
}

/// Terminal outcome of a request that did not succeed.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("User not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("No acceptable representation")]
    NotAcceptable,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
