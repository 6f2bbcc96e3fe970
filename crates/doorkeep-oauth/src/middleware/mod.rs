//! HTTP middleware: the bearer-token gateway and error rendering.

pub mod auth;
pub mod error;
pub mod types;

pub use auth::{BearerAuth, GatewayState};
pub use types::RequestIdentity;
