//! Token endpoint handler.
//!
//! Exchanges a single-use authorization code for a bearer token. The consume
//! operation is atomic in the code store, so a replayed code fails even under
//! concurrent exchange attempts.
//!
//! ```ignore
//! POST /oauth/token
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=authorization_code
//! &code=SplxlOBeZQQYbYS6WxSbIA
//! &client_id=errornot
//! &redirect_uri=http://127.0.0.1:8888/login
//! ```

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::AuthResult;
use crate::error::OAuthError;

use super::OAuthState;

/// Token endpoint form parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    /// Must be `authorization_code`.
    #[serde(default)]
    pub grant_type: Option<String>,

    /// The authorization code being exchanged.
    #[serde(default)]
    pub code: Option<String>,

    /// Client presenting the code.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Redirect URI the code was issued against.
    #[serde(default)]
    pub redirect_uri: Option<String>,
}

/// Token endpoint success body.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,

    /// Always `bearer`.
    pub token_type: &'static str,

    /// Remaining token lifetime in seconds.
    pub expires_in: i64,
}

/// `POST /oauth/token` handler.
pub async fn token_handler(
    State(state): State<OAuthState>,
    Form(request): Form<TokenRequest>,
) -> Response {
    match exchange(&state, &request).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn exchange(state: &OAuthState, request: &TokenRequest) -> AuthResult<TokenResponse> {
    let grant_type = request
        .grant_type
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(OAuthError::InvalidRequest)?;
    if grant_type != "authorization_code" {
        return Err(OAuthError::UnsupportedGrantType);
    }

    let code = required(&request.code)?;
    let client_id = required(&request.client_id)?;
    let redirect_uri = required(&request.redirect_uri)?;

    // Consume first: the code is burned on its first exchange attempt, even
    // one that then fails the binding check.
    let consumed = state.code_storage.consume(code).await?;
    if !consumed.matches_binding(client_id, redirect_uri) {
        tracing::debug!(
            client_id = %client_id,
            "exchange parameters do not match the code's bindings"
        );
        return Err(OAuthError::InvalidGrant);
    }

    let token = state
        .token_storage
        .issue(&consumed.user_id, &consumed.client_id)
        .await?;

    tracing::debug!(
        client_id = %consumed.client_id,
        user_id = %consumed.user_id,
        "authorization code exchanged"
    );

    Ok(TokenResponse {
        expires_in: token.expires_in(),
        access_token: token.access_token,
        token_type: "bearer",
    })
}

fn required(value: &Option<String>) -> Result<&str, OAuthError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(OAuthError::InvalidRequest)
}
