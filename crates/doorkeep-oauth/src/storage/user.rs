//! User storage and credential verification traits.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::User;

/// Outcome of verifying a presented email/password pair.
///
/// A single collapsed failure variant on purpose: the caller cannot tell an
/// unknown email from a wrong password, which keeps login responses free of
/// account-enumeration signal.
#[derive(Debug, Clone)]
pub enum Verification {
    /// The credentials matched this user.
    Verified(User),
    /// The credentials did not match any user.
    Failed,
}

impl Verification {
    /// Returns `true` if the credentials were accepted.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }
}

/// Storage operations for users.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Finds a user by id.
    ///
    /// Returns `None` if the user does not exist (anymore).
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<User>>;

    /// Verifies an email/password pair against the user store.
    ///
    /// # Errors
    ///
    /// Returns an error only on a storage fault. A credential mismatch of any
    /// kind is `Ok(Verification::Failed)`.
    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<Verification>;
}
