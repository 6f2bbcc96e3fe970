//! # doorkeep-memory
//!
//! In-memory implementations of the `doorkeep-oauth` storage traits, backed
//! by [`dashmap::DashMap`]. Used by the dev server and by integration tests;
//! a persistent deployment swaps these for a database-backed crate behind
//! the same traits.

pub mod client;
pub mod code;
pub mod token;
pub mod user;

pub use client::MemoryClientStore;
pub use code::MemoryCodeStore;
pub use token::MemoryTokenStore;
pub use user::MemoryUserStore;
