// ============================================================================
// Profile Core - User Service
// File: crates/profile-core/src/services/user_service.rs
// ============================================================================
//! Request orchestration for the user resource.
//!
//! Every operation runs its precondition checks before touching the store, so a
//! rejected request never leaves a partial mutation behind.

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use profile_shared::utils::parse_entity_id;
use profile_shared::PageQuery;

use crate::domain::{User, UserDefaults, UserDraft};
use crate::error::ServiceError;
use crate::repositories::{UpsertOutcome, UserRepository};

use super::negotiation::{negotiate, Representation, JSON_AND_XML};
use super::pagination::{PageRequest, PaginationMetadata};
use super::patch::{apply_patch, PatchOperation};
use super::validation::{validate_user, ValidationMode};

/// Methods supported on the user collection
pub const COLLECTION_METHODS: &[&str] = &["POST", "GET", "OPTIONS"];

/// A result paired with the representation it should be rendered in
#[derive(Debug, Clone, PartialEq)]
pub struct Negotiated<T> {
    pub value: T,
    pub representation: Representation,
}

impl<T> Negotiated<T> {
    fn new(value: T, representation: Representation) -> Self {
        Self { value, representation }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplaceOutcome {
    /// No record had the identifier; one was created under it.
    Created(Negotiated<User>),
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListedUsers {
    pub users: Vec<User>,
    pub metadata: PaginationMetadata,
    pub representation: Representation,
}

/// User operations over any repository implementation
pub struct UserService<R: UserRepository + ?Sized> {
    user_repo: Arc<R>,
    defaults: UserDefaults,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(user_repo: Arc<R>, defaults: UserDefaults) -> Self {
        Self { user_repo, defaults }
    }

    /// Fetch one user. Malformed identifiers are reported as not found.
    pub async fn get_user(
        &self,
        raw_id: &str,
        accept: Option<&str>,
    ) -> Result<Negotiated<User>, ServiceError> {
        let id = parse_entity_id(raw_id).ok_or(ServiceError::NotFound)?;

        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let representation = negotiate(accept, JSON_AND_XML).ok_or(ServiceError::NotAcceptable)?;
        Ok(Negotiated::new(user, representation))
    }

    /// Create a user with a store-assigned identifier
    pub async fn create_user(
        &self,
        draft: Option<UserDraft>,
        accept: Option<&str>,
    ) -> Result<Negotiated<User>, ServiceError> {
        let draft = draft
            .ok_or_else(|| ServiceError::MalformedRequest("User body is required".to_string()))?
            .with_creation_defaults(&self.defaults);

        validate_user(&draft, ValidationMode::Creation).map_err(|errors| {
            warn!("Create rejected: {}", errors);
            ServiceError::ValidationFailed(errors)
        })?;

        // Checked before insert so a 406 never leaves a record behind
        let representation = negotiate(accept, JSON_AND_XML).ok_or(ServiceError::NotAcceptable)?;

        let created = self.user_repo.insert(&draft.into_user(Uuid::nil())).await?;
        info!("User created: {} ({})", created.id, created.login);

        Ok(Negotiated::new(created, representation))
    }

    /// Create or fully replace the user stored under `raw_id`
    pub async fn replace_user(
        &self,
        raw_id: &str,
        draft: Option<UserDraft>,
        accept: Option<&str>,
    ) -> Result<ReplaceOutcome, ServiceError> {
        let draft = draft
            .ok_or_else(|| ServiceError::MalformedRequest("User body is required".to_string()))?;
        let id = parse_entity_id(raw_id).ok_or_else(|| {
            ServiceError::MalformedRequest(format!("Invalid user id: {}", raw_id))
        })?;

        validate_user(&draft, ValidationMode::FullFields).map_err(|errors| {
            warn!("Replace of {} rejected: {}", id, errors);
            ServiceError::ValidationFailed(errors)
        })?;

        // The store keeps an existing record's game statistics under its own lock
        let user = draft.into_user(id);

        match self.user_repo.upsert(&user).await? {
            UpsertOutcome::Updated => {
                info!("User replaced: {}", id);
                Ok(ReplaceOutcome::Updated)
            }
            UpsertOutcome::Inserted => {
                info!("User created by replace: {}", id);
                // Replace has no 406 outcome; fall back to the preferred representation
                let representation =
                    negotiate(accept, JSON_AND_XML).unwrap_or(Representation::Json);
                Ok(ReplaceOutcome::Created(Negotiated::new(user, representation)))
            }
        }
    }

    /// Apply replace operations to a blank template and store the result.
    ///
    /// Fields not named by an operation are not taken from the stored record, so a
    /// document that omits any of them fails validation.
    pub async fn patch_user(
        &self,
        raw_id: &str,
        operations: Option<Vec<PatchOperation>>,
    ) -> Result<(), ServiceError> {
        let operations = operations
            .ok_or_else(|| ServiceError::MalformedRequest("Patch document is required".to_string()))?;

        let draft = apply_patch(&operations)
            .map_err(|e| ServiceError::MalformedRequest(e.to_string()))?;

        validate_user(&draft, ValidationMode::FullFields).map_err(|errors| {
            warn!("Patch of {} rejected: {}", raw_id, errors);
            ServiceError::ValidationFailed(errors)
        })?;

        let id = parse_entity_id(raw_id).ok_or(ServiceError::NotFound)?;
        let existing = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let user = carry_over_stats(draft.into_user(id), &existing);
        self.user_repo.update(&user).await?;

        // update() ignores unknown ids, so confirm the record survived
        if self.user_repo.find_by_id(&id).await?.is_none() {
            return Err(ServiceError::NotFound);
        }

        info!("User patched: {}", id);
        Ok(())
    }

    pub async fn delete_user(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_entity_id(raw_id).ok_or(ServiceError::NotFound)?;

        if self.user_repo.find_by_id(&id).await?.is_none() {
            return Err(ServiceError::NotFound);
        }

        self.user_repo.delete(&id).await?;
        info!("User deleted: {}", id);
        Ok(())
    }

    /// One page of users. Never fails on caller input: bad paging values are
    /// clamped and an unacceptable Accept falls back to JSON.
    pub async fn list_users(
        &self,
        query: &PageQuery,
        base_url: &str,
        accept: Option<&str>,
    ) -> Result<ListedUsers, ServiceError> {
        let request = PageRequest::from_query(query);
        debug!(
            "Listing users page {} size {} (requested {:?}/{:?})",
            request.page_number, request.page_size, query.page_number, query.page_size
        );

        let page = self
            .user_repo
            .page(request.page_number, request.page_size)
            .await?;
        let metadata = PaginationMetadata::from_page(&page, base_url);
        let representation = negotiate(accept, JSON_AND_XML).unwrap_or(Representation::Json);

        Ok(ListedUsers {
            users: page.items,
            metadata,
            representation,
        })
    }

    pub fn collection_methods(&self) -> &'static [&'static str] {
        COLLECTION_METHODS
    }

    pub async fn user_count(&self) -> Result<usize, ServiceError> {
        Ok(self.user_repo.count().await?)
    }
}

/// Game statistics are not settable through the API and survive a rewrite.
fn carry_over_stats(mut user: User, existing: &User) -> User {
    user.games_played = existing.games_played;
    user.current_game_id = existing.current_game_id;
    user
}
