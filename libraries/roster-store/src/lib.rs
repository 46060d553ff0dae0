//! Roster Store
//!
//! Storage backends implementing the `roster_core::UserStore` trait.
//!
//! Currently ships a single in-memory backend; the trait boundary keeps the
//! door open for a persistent implementation later.

#![forbid(unsafe_code)]

pub mod memory;

pub use memory::MemoryStore;
