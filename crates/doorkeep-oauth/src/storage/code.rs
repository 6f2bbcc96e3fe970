//! Authorization code storage trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::AuthorizationCode;

/// Storage for single-use authorization codes.
///
/// Implementations must guarantee code uniqueness under concurrent issuance
/// and make `consume` atomic so a code can never be exchanged twice.
#[async_trait]
pub trait CodeStorage: Send + Sync {
    /// Mints and records a code bound to the given triple.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. A lost write must surface here
    /// rather than silently appear to succeed.
    async fn create(
        &self,
        client_id: &str,
        user_id: &str,
        redirect_uri: &str,
    ) -> AuthResult<AuthorizationCode>;

    /// Finds a code by its opaque value, regardless of consumed/expired
    /// status. Callers check `is_valid()` before trusting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_code(&self, code: &str) -> AuthResult<Option<AuthorizationCode>>;

    /// Atomically consumes a code, marking it used.
    ///
    /// Returns the consumed record with `consumed_at` set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OAuthError::InvalidGrant`] if the code is unknown,
    /// expired, or already consumed; a storage error if the operation fails.
    async fn consume(&self, code: &str) -> AuthResult<AuthorizationCode>;
}
