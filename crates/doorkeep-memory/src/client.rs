//! In-memory client registry.

use async_trait::async_trait;
use dashmap::DashMap;

use doorkeep_oauth::{AuthResult, Client, ClientStorage};

/// Client registry held in memory. Registrations are inserted at bootstrap
/// and read-only afterwards.
#[derive(Default)]
pub struct MemoryClientStore {
    clients: DashMap<String, Client>,
}

impl MemoryClientStore {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client.
    pub fn insert(&self, client: Client) {
        self.clients.insert(client.client_id.clone(), client);
    }

    /// Number of registered clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` if no clients are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientStorage for MemoryClientStore {
    async fn find_by_client_id(&self, client_id: &str) -> AuthResult<Option<Client>> {
        Ok(self.clients.get(client_id).map(|c| c.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_finds_registered_client() {
        let store = MemoryClientStore::new();
        store.insert(Client::new("errornot", "ErrorNot", "http://127.0.0.1:8888/login"));

        let found = store.find_by_client_id("errornot").await.unwrap();
        assert_eq!(found.unwrap().name, "ErrorNot");
    }

    #[tokio::test]
    async fn lookup_of_unknown_client_is_none() {
        let store = MemoryClientStore::new();
        assert!(store.find_by_client_id("toto").await.unwrap().is_none());
    }
}
