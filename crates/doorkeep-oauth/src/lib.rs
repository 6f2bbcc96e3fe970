//! # doorkeep-oauth
//!
//! OAuth 2.0 authorization server core for Doorkeep.
//!
//! This crate provides:
//! - The authorization-code issuance flow (parameter validation, client and
//!   redirect-URI binding, response-type dispatch, credential verification,
//!   code issuance, redirect construction)
//! - The bearer-token validation gateway that protected resource requests
//!   pass through
//! - The OAuth error taxonomy and its uniform JSON envelope
//! - Storage traits for the backing stores (clients, users, codes, tokens)
//! - Axum HTTP handlers for the authorize, login, and token endpoints
//!
//! ## Modules
//!
//! - [`error`] - OAuth error taxonomy
//! - [`oauth`] - Authorization-code flow implementation
//! - [`storage`] - Storage traits for auth-related data
//! - [`types`] - Domain types (clients, users, authorization codes)
//! - [`middleware`] - Bearer token gateway and error rendering
//! - [`http`] - Axum HTTP handlers for the OAuth endpoints

pub mod error;
pub mod http;
pub mod middleware;
pub mod oauth;
pub mod storage;
pub mod types;

pub use error::OAuthError;
pub use http::{OAuthState, authorize_handler, login_handler, token_handler};
pub use middleware::{BearerAuth, GatewayState, RequestIdentity};
pub use oauth::{
    AuthorizationFlow, AuthorizationRequest, AuthorizationResponse, AuthorizeOutcome,
    LoginOutcome, LoginSubmission, RawAuthorizeParams, ResponseType,
};
pub use storage::{
    ClientStorage, CodeStorage, IssuedToken, TokenGrant, TokenStorage, UserStorage, Verification,
};
pub use types::{AuthorizationCode, Client, User};

/// Type alias for results produced by this crate.
pub type AuthResult<T> = Result<T, OAuthError>;
