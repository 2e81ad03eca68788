//! # Profile Core - Domain Module
//! 
//! Domain entities for the user profile service.

pub mod user;
pub mod user_draft;
pub mod page_list;

// Re-export all entities
pub use user::User;
pub use user_draft::{UserDefaults, UserDraft};
pub use page_list::PageList;
