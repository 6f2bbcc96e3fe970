//! In-memory authorization code store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use time::{Duration, OffsetDateTime};

use doorkeep_oauth::{AuthResult, AuthorizationCode, CodeStorage, OAuthError};

/// Default code lifetime, per the OAuth 2.0 recommendation.
pub const DEFAULT_CODE_LIFETIME: Duration = Duration::minutes(10);

/// Authorization code store held in memory.
///
/// Issuance is collision-checked: the insert retries with a fresh value on
/// the (astronomically unlikely) collision of two 256-bit codes, so two
/// concurrent logins can never receive the same code. Consumption goes
/// through the map's entry lock and is atomic.
pub struct MemoryCodeStore {
    codes: DashMap<String, AuthorizationCode>,
    lifetime: Duration,
}

impl MemoryCodeStore {
    /// Creates a store with the default code lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(DEFAULT_CODE_LIFETIME)
    }

    /// Creates a store with a custom code lifetime.
    #[must_use]
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            codes: DashMap::new(),
            lifetime,
        }
    }

    /// Drops expired codes. Returns the number removed.
    pub fn cleanup_expired(&self) -> usize {
        let before = self.codes.len();
        self.codes.retain(|_, code| !code.is_expired());
        let removed = before - self.codes.len();
        if removed > 0 {
            tracing::debug!(removed, "expired authorization codes dropped");
        }
        removed
    }
}

impl Default for MemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeStorage for MemoryCodeStore {
    async fn create(
        &self,
        client_id: &str,
        user_id: &str,
        redirect_uri: &str,
    ) -> AuthResult<AuthorizationCode> {
        loop {
            let code = AuthorizationCode::new(client_id, user_id, redirect_uri, self.lifetime);
            match self.codes.entry(code.code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(code.clone());
                    return Ok(code);
                }
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> AuthResult<Option<AuthorizationCode>> {
        Ok(self.codes.get(code).map(|c| c.clone()))
    }

    async fn consume(&self, code: &str) -> AuthResult<AuthorizationCode> {
        let Some(mut entry) = self.codes.get_mut(code) else {
            return Err(OAuthError::InvalidGrant);
        };
        if !entry.is_valid() {
            return Err(OAuthError::InvalidGrant);
        }
        entry.consumed_at = Some(OffsetDateTime::now_utc());
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const REDIRECT: &str = "http://127.0.0.1:8888/login";

    #[tokio::test]
    async fn created_code_is_retrievable_with_bindings_intact() {
        let store = MemoryCodeStore::new();
        let code = store.create("errornot", "user-1", REDIRECT).await.unwrap();

        let found = store.find_by_code(&code.code).await.unwrap().unwrap();
        assert_eq!(found.client_id, "errornot");
        assert_eq!(found.user_id, "user-1");
        assert_eq!(found.redirect_uri, REDIRECT);
    }

    #[tokio::test]
    async fn consume_is_single_use() {
        let store = MemoryCodeStore::new();
        let code = store.create("errornot", "user-1", REDIRECT).await.unwrap();

        let consumed = store.consume(&code.code).await.unwrap();
        assert!(consumed.is_consumed());

        let replay = store.consume(&code.code).await;
        assert!(matches!(replay, Err(OAuthError::InvalidGrant)));
    }

    #[tokio::test]
    async fn unknown_code_is_invalid_grant() {
        let store = MemoryCodeStore::new();
        assert!(matches!(
            store.consume("nope").await,
            Err(OAuthError::InvalidGrant)
        ));
    }

    #[tokio::test]
    async fn expired_code_is_invalid_grant() {
        let store = MemoryCodeStore::with_lifetime(Duration::seconds(-1));
        let code = store.create("errornot", "user-1", REDIRECT).await.unwrap();
        assert!(matches!(
            store.consume(&code.code).await,
            Err(OAuthError::InvalidGrant)
        ));
    }

    #[tokio::test]
    async fn concurrent_issuance_yields_distinct_codes() {
        let store = Arc::new(MemoryCodeStore::new());
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create("errornot", "user-1", REDIRECT).await.unwrap()
            }));
        }

        let mut codes = Vec::new();
        for handle in handles {
            codes.push(handle.await.unwrap().code);
        }
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 32);
    }

    #[tokio::test]
    async fn cleanup_drops_only_expired_codes() {
        let expired = MemoryCodeStore::with_lifetime(Duration::seconds(-1));
        expired.create("c", "u", REDIRECT).await.unwrap();
        assert_eq!(expired.cleanup_expired(), 1);

        let fresh = MemoryCodeStore::new();
        fresh.create("c", "u", REDIRECT).await.unwrap();
        assert_eq!(fresh.cleanup_expired(), 0);
    }
}
