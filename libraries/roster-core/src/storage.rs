//! Storage trait for the user collection

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User, UserId};
use async_trait::async_trait;

/// Storage context providing access to the user collection
///
/// This trait abstracts the backing collection so the in-memory store can be
/// swapped for a persistent implementation without touching call sites.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn get_all_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Create a new user and append it to the collection
    async fn create_user(&self, payload: CreateUser) -> Result<User>;

    /// Shallow-merge an update into an existing record
    ///
    /// Returns `RosterError::UserNotFound` when no record matches.
    async fn update_user(&self, id: &UserId, payload: UpdateUser) -> Result<User>;

    /// Remove a user
    ///
    /// Returns `RosterError::UserNotFound` when no record matches; the
    /// collection is left unchanged in that case.
    async fn delete_user(&self, id: &UserId) -> Result<()>;

    /// Convenience alias for `get_user_by_id`
    async fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        self.get_user_by_id(id).await
    }
}
