//! Domain services (business logic)

pub mod negotiation;
pub mod pagination;
pub mod patch;
pub mod user_service;
pub mod validation;

pub use negotiation::{negotiate, Representation, JSON_AND_XML};
pub use pagination::{PageRequest, PaginationMetadata};
pub use patch::{apply_patch, PatchError, PatchOperation};
pub use user_service::{ListedUsers, Negotiated, ReplaceOutcome, UserService, COLLECTION_METHODS};
pub use validation::{field_messages, validate_user, ValidationMode};
