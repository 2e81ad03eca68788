//! # Profile API
//! 
//! HTTP handlers, DTOs, representation rendering, and routing for the user resource.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
