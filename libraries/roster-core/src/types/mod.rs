/// Domain types for Roster
mod ids;
mod user;

pub use ids::UserId;
pub use user::{CreateUser, Role, UpdateUser, User};
