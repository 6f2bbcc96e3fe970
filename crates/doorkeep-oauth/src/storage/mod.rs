//! Storage traits for the backing stores.
//!
//! The authorization flow and the token gateway treat all persistence as
//! external, concurrently-accessed services behind these traits:
//!
//! - OAuth client registrations (read-only here)
//! - Users and credential verification
//! - Single-use authorization codes
//! - Bearer tokens (owned by the token store; this crate only resolves them)
//!
//! Implementations live in separate crates (`doorkeep-memory` provides the
//! in-memory backend used by the dev server and tests).

pub mod client;
pub mod code;
pub mod token;
pub mod user;

pub use client::ClientStorage;
pub use code::CodeStorage;
pub use token::{IssuedToken, TokenGrant, TokenStorage};
pub use user::{UserStorage, Verification};
