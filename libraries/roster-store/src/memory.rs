//! In-memory user store

use async_trait::async_trait;
use roster_core::{CreateUser, Result, RosterError, UpdateUser, User, UserId, UserStore};
use tokio::sync::RwLock;

/// In-memory implementation of `UserStore`
///
/// Records live in a `Vec` to preserve insertion order. There is no
/// durability: all data is lost when the process exits.
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with records
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a store seeded with the demo record (id "1", John Doe)
    pub fn with_demo_data() -> Self {
        let demo = User {
            id: UserId::new("1"),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            role: roster_core::Role::User,
            date_of_birth: Some("1990-01-01".to_string()),
            created_at: chrono::Utc::now().to_rfc3339(),
            first_name: None,
            last_name: None,
            phone: None,
        };
        Self::with_users(vec![demo])
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| &u.id == id)
            .cloned())
    }

    async fn create_user(&self, payload: CreateUser) -> Result<User> {
        let user = payload.into_user();
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &UserId, payload: UpdateUser) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id.clone()))?;

        payload.apply_to(user);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<()> {
        let mut users = self.users.write().await;
        let initial_length = users.len();
        users.retain(|u| &u.id != id);

        if users.len() == initial_length {
            return Err(RosterError::UserNotFound(id.clone()));
        }
        Ok(())
    }
}
