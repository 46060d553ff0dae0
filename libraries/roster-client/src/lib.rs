//! Roster Client
//!
//! HTTP client library for the Roster users API.
//!
//! # Features
//!
//! - **Typed CRUD**: `get_users`, `create_user`, `update_user`, `delete_user`
//! - **Caching**: the user list is cached under a single slot and invalidated
//!   by every successful mutation, so the next read re-fetches
//! - **Form validation**: client-side rules enforced before submission
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, RosterClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     // Test connection
//!     let health = client.health().await?;
//!     println!("Server {} is {}", health.version, health.status);
//!
//!     // List users (cached after the first call)
//!     let users = client.get_users().await?;
//!     println!("Found {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod form;
mod types;

// Re-export main types
pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use form::{validate_date_of_birth, UserForm};
pub use types::{ClientConfig, DeleteResponse, ServerHealth};

// Re-export the domain types callers exchange with the API
pub use roster_core::{CreateUser, Role, UpdateUser, User, UserId};
