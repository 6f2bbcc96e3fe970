//! Client registry lookup trait.

use async_trait::async_trait;

use crate::AuthResult;
use crate::types::Client;

/// Read-only lookup into the client registry.
///
/// Registrations are created out-of-band; the authorization flow only ever
/// resolves a client_id to its registered metadata.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Finds a client by its OAuth client_id.
    ///
    /// Returns `None` if no client is registered under the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    async fn find_by_client_id(&self, client_id: &str) -> AuthResult<Option<Client>>;
}
