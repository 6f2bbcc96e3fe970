//! Domain types for the authorization server.

pub mod client;
pub mod code;
pub mod user;

pub use client::Client;
pub use code::{AuthorizationCode, random_opaque};
pub use user::User;
