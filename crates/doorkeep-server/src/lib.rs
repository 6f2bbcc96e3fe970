//! # doorkeep-server
//!
//! The Doorkeep server binary crate: configuration loading, tracing setup,
//! store bootstrap, and the axum router that exposes the OAuth endpoints,
//! the bearer gateway, and a protected sample resource.

pub mod bootstrap;
pub mod config;
pub mod handlers;
pub mod observability;
pub mod server;
pub mod state;

pub use bootstrap::{Stores, build_state};
pub use config::AppConfig;
pub use server::{DoorkeepServer, build_app};
pub use state::AppState;
