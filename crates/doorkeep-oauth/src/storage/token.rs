//! Bearer token store trait and grant types.
//!
//! The token store is owned externally: the gateway only resolves tokens to
//! identities, and the token endpoint asks the store to mint them. Token
//! refresh and revocation are out of scope.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::AuthResult;

/// The identity mapping behind a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    /// User the token was issued to.
    pub user_id: String,

    /// Client the token was issued for.
    pub client_id: String,

    /// When the token stops resolving.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl TokenGrant {
    /// Returns `true` if the token has passed its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        OffsetDateTime::now_utc() > self.expires_at
    }
}

/// A freshly minted bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The opaque token value.
    pub access_token: String,

    /// When the token expires.
    pub expires_at: OffsetDateTime,
}

impl IssuedToken {
    /// Remaining lifetime in whole seconds, clamped at zero.
    #[must_use]
    pub fn expires_in(&self) -> i64 {
        (self.expires_at - OffsetDateTime::now_utc())
            .whole_seconds()
            .max(0)
    }
}

/// Storage operations on the external token store.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Mints a bearer token mapped to `(user_id, client_id, expiry)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn issue(&self, user_id: &str, client_id: &str) -> AuthResult<IssuedToken>;

    /// Resolves a bearer token to its grant.
    ///
    /// Returns `None` for tokens the store does not recognize or no longer
    /// honors (expired). The gateway forwards that rejection as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn resolve(&self, token: &str) -> AuthResult<Option<TokenGrant>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn grant_expiry() {
        let grant = TokenGrant {
            user_id: "u".into(),
            client_id: "c".into(),
            expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
        };
        assert!(!grant.is_expired());

        let grant = TokenGrant {
            expires_at: OffsetDateTime::now_utc() - Duration::seconds(1),
            ..grant
        };
        assert!(grant.is_expired());
    }

    #[test]
    fn issued_token_expires_in_clamps_at_zero() {
        let token = IssuedToken {
            access_token: "t".into(),
            expires_at: OffsetDateTime::now_utc() - Duration::hours(1),
        };
        assert_eq!(token.expires_in(), 0);

        let token = IssuedToken {
            access_token: "t".into(),
            expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
        };
        assert!(token.expires_in() > 3590);
    }
}
