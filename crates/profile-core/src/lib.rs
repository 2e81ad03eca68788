//! # Profile Core
//! 
//! Domain entities, the repository port, and the request orchestration services
//! for the user profile resource.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ServiceError};
