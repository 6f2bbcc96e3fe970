//! Axum HTTP handlers for the OAuth endpoints.
//!
//! - `GET /oauth/authorize` - [`authorize_handler`]
//! - `POST /login` - [`login_handler`]
//! - `POST /oauth/token` - [`token_handler`]

use std::sync::Arc;

use crate::oauth::AuthorizationFlow;
use crate::storage::{CodeStorage, TokenStorage};

pub mod authorize;
pub mod login;
pub mod templates;
pub mod token;

pub use authorize::authorize_handler;
pub use login::login_handler;
pub use token::{TokenRequest, TokenResponse, token_handler};

/// Shared state for the OAuth endpoint handlers.
#[derive(Clone)]
pub struct OAuthState {
    /// The authorization flow service.
    pub flow: Arc<AuthorizationFlow>,

    /// Code store, consumed by the token endpoint on exchange.
    pub code_storage: Arc<dyn CodeStorage>,

    /// Token store, asked to mint bearer tokens on exchange.
    pub token_storage: Arc<dyn TokenStorage>,
}

impl OAuthState {
    /// Creates a new handler state.
    #[must_use]
    pub fn new(
        flow: Arc<AuthorizationFlow>,
        code_storage: Arc<dyn CodeStorage>,
        token_storage: Arc<dyn TokenStorage>,
    ) -> Self {
        Self {
            flow,
            code_storage,
            token_storage,
        }
    }
}
