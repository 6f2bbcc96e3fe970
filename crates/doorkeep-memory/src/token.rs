//! In-memory bearer token store.
//!
//! Plays the role of the external token store the gateway consumes: it owns
//! the token-to-identity mapping and its expiry policy.

use async_trait::async_trait;
use dashmap::DashMap;
use time::{Duration, OffsetDateTime};

use doorkeep_oauth::types::random_opaque;
use doorkeep_oauth::{AuthResult, IssuedToken, TokenGrant, TokenStorage};

/// Default bearer token lifetime.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::hours(1);

/// Bearer token store held in memory.
pub struct MemoryTokenStore {
    tokens: DashMap<String, TokenGrant>,
    lifetime: Duration,
}

impl MemoryTokenStore {
    /// Creates a store with the default token lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(DEFAULT_TOKEN_LIFETIME)
    }

    /// Creates a store with a custom token lifetime.
    #[must_use]
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            tokens: DashMap::new(),
            lifetime,
        }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStore {
    async fn issue(&self, user_id: &str, client_id: &str) -> AuthResult<IssuedToken> {
        let expires_at = OffsetDateTime::now_utc() + self.lifetime;
        let token = random_opaque();
        self.tokens.insert(
            token.clone(),
            TokenGrant {
                user_id: user_id.to_string(),
                client_id: client_id.to_string(),
                expires_at,
            },
        );
        Ok(IssuedToken {
            access_token: token,
            expires_at,
        })
    }

    async fn resolve(&self, token: &str) -> AuthResult<Option<TokenGrant>> {
        let Some(grant) = self.tokens.get(token).map(|g| g.clone()) else {
            return Ok(None);
        };
        if grant.is_expired() {
            self.tokens.remove(token);
            return Ok(None);
        }
        Ok(Some(grant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issued_token_resolves_to_its_grant() {
        let store = MemoryTokenStore::new();
        let token = store.issue("user-1", "errornot").await.unwrap();

        let grant = store.resolve(&token.access_token).await.unwrap().unwrap();
        assert_eq!(grant.user_id, "user-1");
        assert_eq!(grant.client_id, "errornot");
    }

    #[tokio::test]
    async fn unknown_token_does_not_resolve() {
        let store = MemoryTokenStore::new();
        assert!(store.resolve("garbage").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_token_does_not_resolve() {
        let store = MemoryTokenStore::with_lifetime(Duration::seconds(-1));
        let token = store.issue("user-1", "errornot").await.unwrap();
        assert!(store.resolve(&token.access_token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tokens_are_distinct_per_issue() {
        let store = MemoryTokenStore::new();
        let a = store.issue("user-1", "errornot").await.unwrap();
        let b = store.issue("user-1", "errornot").await.unwrap();
        assert_ne!(a.access_token, b.access_token);
    }
}
