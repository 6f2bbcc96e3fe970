//! Store construction and seed data registration.

use std::sync::Arc;

use doorkeep_memory::{MemoryClientStore, MemoryCodeStore, MemoryTokenStore, MemoryUserStore};
use doorkeep_oauth::{AuthorizationFlow, Client, GatewayState, OAuthState};

use crate::config::AppConfig;
use crate::state::AppState;

/// Handles to the backing stores, kept alongside the router state so tests
/// and admin tasks can reach past the trait objects.
pub struct Stores {
    pub clients: Arc<MemoryClientStore>,
    pub users: Arc<MemoryUserStore>,
    pub codes: Arc<MemoryCodeStore>,
    pub tokens: Arc<MemoryTokenStore>,
}

/// Builds the stores, registers the seed data, and wires up the application
/// state.
pub fn build_state(cfg: &AppConfig) -> anyhow::Result<(AppState, Stores)> {
    let clients = Arc::new(MemoryClientStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let codes = Arc::new(MemoryCodeStore::with_lifetime(cfg.oauth.code_lifetime()));
    let tokens = Arc::new(MemoryTokenStore::with_lifetime(cfg.oauth.token_lifetime()));

    for seed in &cfg.seed.clients {
        let mut client = Client::new(&seed.client_id, &seed.name, &seed.redirect_uri);
        client.secret = seed.secret.clone();
        clients.insert(client);
        tracing::info!(client_id = %seed.client_id, "client registered");
    }
    for seed in &cfg.seed.users {
        let user = users.create(&seed.email, &seed.password, seed.name.as_deref())?;
        tracing::info!(email = %user.email, "user registered");
    }

    let flow = Arc::new(AuthorizationFlow::new(
        clients.clone(),
        users.clone(),
        codes.clone(),
    ));

    let state = AppState {
        oauth: OAuthState::new(flow, codes.clone(), tokens.clone()),
        gateway: GatewayState::new(tokens.clone(), users.clone()),
    };

    Ok((
        state,
        Stores {
            clients,
            users,
            codes,
            tokens,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedClient, SeedUser};
    use doorkeep_oauth::UserStorage;

    #[tokio::test]
    async fn seed_data_is_registered() {
        let mut cfg = AppConfig::default();
        cfg.seed.clients.push(SeedClient {
            client_id: "errornot".into(),
            name: "ErrorNot".into(),
            redirect_uri: "http://127.0.0.1:8888/login".into(),
            secret: None,
        });
        cfg.seed.users.push(SeedUser {
            email: "pruyssen@af83.com".into(),
            password: "1234".into(),
            name: None,
        });

        let (_, stores) = build_state(&cfg).unwrap();
        assert_eq!(stores.clients.len(), 1);
        assert!(
            stores
                .users
                .verify_credentials("pruyssen@af83.com", "1234")
                .await
                .unwrap()
                .is_verified()
        );
    }
}
