// ============================================================================
// Profile Infrastructure - In-Memory User Repository
// File: crates/profile-infrastructure/src/memory/user_repo_impl.rs
// ============================================================================

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use profile_core::domain::{PageList, User};
use profile_core::error::DomainError;
use profile_core::repositories::{UpsertOutcome, UserRepository};
use profile_shared::new_id;

/// Stored record plus its insertion sequence, used to order duplicate logins.
#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    sequence: u64,
}

#[derive(Debug, Default)]
struct Inner {
    rows: HashMap<Uuid, UserRow>,
    next_sequence: u64,
}

impl Inner {
    fn fresh_id(&self) -> Uuid {
        let mut id = new_id();
        while self.rows.contains_key(&id) {
            id = new_id();
        }
        id
    }

    fn put_new(&mut self, user: User) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.rows.insert(user.id, UserRow { user, sequence });
    }

    /// Overwrites in place, keeping the original insertion sequence.
    fn overwrite(&mut self, user: &User) -> bool {
        match self.rows.get_mut(&user.id) {
            Some(row) => {
                row.user = user.clone();
                true
            }
            None => false,
        }
    }
}

/// Process-lifetime user store. Every operation runs under one exclusive lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: Mutex<Inner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the built-in admin record
    pub fn seeded() -> Self {
        let repo = Self::new();
        repo.inner.lock().put_new(User::admin());
        repo
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<User, DomainError> {
        if user.has_id() {
            return Err(DomainError::IdentifierAlreadyAssigned(user.id));
        }

        let mut inner = self.inner.lock();
        let id = inner.fresh_id();

        let mut stored = user.clone();
        stored.id = id;
        inner.put_new(stored.clone());

        debug!("Inserted user {}", id);
        Ok(stored)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.inner.lock().rows.get(id).map(|row| row.user.clone()))
    }

    async fn get_or_create_by_login(&self, login: &str) -> Result<User, DomainError> {
        let mut inner = self.inner.lock();

        let existing = inner
            .rows
            .values()
            .filter(|row| row.user.login == login)
            .min_by_key(|row| row.sequence)
            .map(|row| row.user.clone());
        if let Some(user) = existing {
            return Ok(user);
        }

        let id = inner.fresh_id();
        let user = User::with_id(id, login.to_string(), String::new(), String::new());
        inner.put_new(user.clone());

        debug!("Created user {} for login {}", id, login);
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        if !self.inner.lock().overwrite(user) {
            debug!("Update ignored for unknown user {}", user.id);
        }
        Ok(())
    }

    async fn upsert(&self, user: &User) -> Result<UpsertOutcome, DomainError> {
        if !user.has_id() {
            return Err(DomainError::IdentifierRequired);
        }

        let mut inner = self.inner.lock();
        if let Some(row) = inner.rows.get_mut(&user.id) {
            let mut replacement = user.clone();
            replacement.games_played = row.user.games_played;
            replacement.current_game_id = row.user.current_game_id;
            row.user = replacement;
            return Ok(UpsertOutcome::Updated);
        }

        inner.put_new(user.clone());
        Ok(UpsertOutcome::Inserted)
    }

    async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        self.inner.lock().rows.remove(id);
        Ok(())
    }

    async fn page(&self, page_number: u32, page_size: u32) -> Result<PageList<User>, DomainError> {
        let inner = self.inner.lock();
        let total_count = inner.rows.len();

        let mut rows: Vec<&UserRow> = inner.rows.values().collect();
        rows.sort_by(|a, b| {
            a.user
                .login
                .cmp(&b.user.login)
                .then(a.sequence.cmp(&b.sequence))
        });

        let skip = (page_number.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let items = rows
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .map(|row| row.user.clone())
            .collect();

        Ok(PageList::new(items, total_count, page_number, page_size))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.inner.lock().rows.len())
    }
}
