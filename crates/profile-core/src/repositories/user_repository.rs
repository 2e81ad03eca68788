//! User repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::{PageList, User};
use crate::error::DomainError;

/// Which branch an upsert took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a record that has no identifier yet and returns it with a fresh one.
    async fn insert(&self, user: &User) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError>;
    async fn get_or_create_by_login(&self, login: &str) -> Result<User, DomainError>;
    /// Overwrites a known record; unknown identifiers are ignored.
    async fn update(&self, user: &User) -> Result<(), DomainError>;
    /// Inserts `user` as given, or overwrites the stored record while keeping its
    /// game statistics. Both branches run as one atomic step.
    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError>;
    async fn delete(&self, id: &Uuid) -> Result<(), DomainError>;
    /// Users ordered by login, then by insertion.
    async fn page(&self, page_number: u32, page_size: u32) -> Result<PageList<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}
