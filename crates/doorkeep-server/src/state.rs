//! Shared application state.

use axum::extract::FromRef;
use doorkeep_oauth::{GatewayState, OAuthState};

/// Top-level state handed to the router. The OAuth handlers and the bearer
/// gateway each pull their slice out via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub oauth: OAuthState,
    pub gateway: GatewayState,
}

impl FromRef<AppState> for OAuthState {
    fn from_ref(state: &AppState) -> Self {
        state.oauth.clone()
    }
}

impl FromRef<AppState> for GatewayState {
    fn from_ref(state: &AppState) -> Self {
        state.gateway.clone()
    }
}
