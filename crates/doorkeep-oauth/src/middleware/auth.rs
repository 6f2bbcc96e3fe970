//! Bearer token validation gateway.
//!
//! Every protected resource request passes through the [`BearerAuth`]
//! extractor, which resolves the presented token to `(user_id, client_id)`
//! via the token store, re-resolves the user, and rejects the request if the
//! identity no longer exists.
//!
//! # Example
//!
//! ```ignore
//! async fn protected_handler(BearerAuth(identity): BearerAuth) -> String {
//!     format!("Hello, {}!", identity.user.email)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::OAuthError;
use crate::storage::{TokenStorage, UserStorage};

use super::types::RequestIdentity;

/// State required by the bearer token gateway.
///
/// Include this in the application state and expose it to the extractor
/// via `FromRef`.
#[derive(Clone)]
pub struct GatewayState {
    /// Token store, owned externally. Only resolved here, never written.
    pub token_storage: Arc<dyn TokenStorage>,

    /// User store for re-resolving the token's user.
    pub user_storage: Arc<dyn UserStorage>,
}

impl GatewayState {
    /// Creates a new gateway state.
    #[must_use]
    pub fn new(token_storage: Arc<dyn TokenStorage>, user_storage: Arc<dyn UserStorage>) -> Self {
        Self {
            token_storage,
            user_storage,
        }
    }
}

/// Axum extractor that validates a bearer token and resolves its identity.
///
/// The token is taken from the `Authorization: Bearer` header, or from the
/// `oauth_token` query parameter for clients that cannot set headers.
///
/// # Errors
///
/// Rejections (each implements `IntoResponse`):
/// - 401 if the token is missing or the token store does not recognize it
/// - 404 if the token resolves but the user no longer exists
/// - 500 if a backing store fails (logged, not retried)
pub struct BearerAuth(pub RequestIdentity);

impl<S> FromRequestParts<S> for BearerAuth
where
    S: Send + Sync,
    GatewayState: FromRef<S>,
{
    type Rejection = OAuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gateway = GatewayState::from_ref(state);

        let token = extract_bearer_token(parts)
            .ok_or_else(|| OAuthError::invalid_token("no bearer token presented"))?;

        // The token store's rejection is forwarded as-is; this gateway does
        // not redefine it.
        let grant = gateway
            .token_storage
            .resolve(&token)
            .await?
            .ok_or_else(|| {
                tracing::debug!("token not recognized by the token store");
                OAuthError::invalid_token("token rejected by the token store")
            })?;

        // The token looked valid, but identity existence is enforced at
        // request time: a deleted user invalidates every outstanding token.
        let user = match gateway.user_storage.find_by_id(&grant.user_id).await? {
            Some(user) => user,
            None => {
                tracing::debug!(user_id = %grant.user_id, "token resolves to a deleted user");
                return Err(OAuthError::IdentityGone);
            }
        };

        tracing::debug!(
            user_id = %grant.user_id,
            client_id = %grant.client_id,
            "bearer token validated"
        );

        Ok(BearerAuth(RequestIdentity {
            user_id: grant.user_id,
            client_id: grant.client_id,
            user,
        }))
    }
}

/// Pulls the bearer token from the Authorization header, falling back to the
/// `oauth_token` query parameter.
fn extract_bearer_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        return header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string);
    }

    let query = parts.uri.query()?;
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == "oauth_token" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_for(uri: &str, auth: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn token_from_authorization_header() {
        let parts = parts_for("/resource", Some("Bearer abc123"));
        assert_eq!(extract_bearer_token(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn token_from_query_parameter() {
        let parts = parts_for("/resource?oauth_token=abc123&x=1", None);
        assert_eq!(extract_bearer_token(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn header_wins_over_query() {
        let parts = parts_for("/resource?oauth_token=from-query", Some("Bearer from-header"));
        assert_eq!(extract_bearer_token(&parts).as_deref(), Some("from-header"));
    }

    #[test]
    fn missing_token_is_none() {
        let parts = parts_for("/resource", None);
        assert!(extract_bearer_token(&parts).is_none());
    }

    #[test]
    fn empty_bearer_value_is_none() {
        let parts = parts_for("/resource", Some("Bearer "));
        assert!(extract_bearer_token(&parts).is_none());
    }

    #[test]
    fn non_bearer_scheme_is_none() {
        let parts = parts_for("/resource", Some("Basic dXNlcjpwdw=="));
        assert!(extract_bearer_token(&parts).is_none());
    }
}
