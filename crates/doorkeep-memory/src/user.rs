//! In-memory user store with argon2 credential verification.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use async_trait::async_trait;
use dashmap::DashMap;

use doorkeep_oauth::{AuthResult, OAuthError, User, UserStorage, Verification};

/// User store held in memory. Passwords are argon2-hashed on insert.
#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<String, User>,
    ids_by_email: DashMap<String, String>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a user with the given login credentials.
    ///
    /// # Errors
    ///
    /// Returns a storage error if password hashing fails.
    pub fn create(&self, email: &str, password: &str, name: Option<&str>) -> AuthResult<User> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| OAuthError::storage(format!("password hashing failed: {e}")))?
            .to_string();

        let mut user = User::new(email);
        user.name = name.map(ToString::to_string);
        user.password_hash = Some(hash);

        self.ids_by_email
            .insert(user.email.clone(), user.id.clone());
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    /// Deletes a user, returning the removed record if it existed.
    ///
    /// Outstanding tokens for the user keep resolving in the token store but
    /// fail the gateway's identity check afterwards.
    pub fn remove(&self, id: &str) -> Option<User> {
        let (_, user) = self.users.remove(id)?;
        self.ids_by_email.remove(&user.email);
        tracing::debug!(user_id = %user.id, "user removed");
        Some(user)
    }
}

#[async_trait]
impl UserStorage for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AuthResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> AuthResult<Verification> {
        // Unknown email and wrong password both fall through to the same
        // collapsed outcome.
        let Some(id) = self.ids_by_email.get(email).map(|id| id.clone()) else {
            return Ok(Verification::Failed);
        };
        let Some(user) = self.users.get(&id).map(|u| u.clone()) else {
            return Ok(Verification::Failed);
        };
        let Some(stored_hash) = user.password_hash.as_deref() else {
            return Ok(Verification::Failed);
        };

        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| OAuthError::storage(format!("corrupt password hash: {e}")))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(Verification::Verified(user)),
            Err(_) => Ok(Verification::Failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn correct_credentials_verify() {
        let store = MemoryUserStore::new();
        let user = store.create("pruyssen@af83.com", "1234", None).unwrap();

        let outcome = store
            .verify_credentials("pruyssen@af83.com", "1234")
            .await
            .unwrap();
        match outcome {
            Verification::Verified(found) => assert_eq!(found.id, user.id),
            Verification::Failed => panic!("expected verification"),
        }
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_collapse() {
        let store = MemoryUserStore::new();
        store.create("pruyssen@af83.com", "1234", None).unwrap();

        let wrong_password = store
            .verify_credentials("pruyssen@af83.com", "123456")
            .await
            .unwrap();
        let unknown_email = store
            .verify_credentials("toto@af83.com", "123456")
            .await
            .unwrap();
        assert!(!wrong_password.is_verified());
        assert!(!unknown_email.is_verified());
    }

    #[tokio::test]
    async fn removed_user_is_gone_by_id_and_email() {
        let store = MemoryUserStore::new();
        let user = store.create("pruyssen@af83.com", "1234", None).unwrap();

        assert!(store.remove(&user.id).is_some());
        assert!(store.find_by_id(&user.id).await.unwrap().is_none());
        assert!(
            !store
                .verify_credentials("pruyssen@af83.com", "1234")
                .await
                .unwrap()
                .is_verified()
        );
    }

    #[tokio::test]
    async fn password_is_stored_hashed() {
        let store = MemoryUserStore::new();
        let user = store.create("a@example.com", "secret", None).unwrap();
        let hash = user.password_hash.unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("secret"));
    }
}
