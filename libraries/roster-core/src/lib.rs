//! Roster Core
//!
//! Platform-agnostic core types, traits, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Role`, `UserId`, and the create/update payloads
//! - **Core Traits**: `UserStore`, the narrow interface every storage backend implements
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{CreateUser, Role};
//!
//! let payload = CreateUser {
//!     email: Some("alice@example.com".to_string()),
//!     ..CreateUser::default()
//! };
//!
//! let user = payload.into_user();
//! assert_eq!(user.name, "Unknown User");
//! assert_eq!(user.role, Role::User);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{CreateUser, Role, UpdateUser, User, UserId};
