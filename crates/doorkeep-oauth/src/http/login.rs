//! Login endpoint handler.

use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::OAuthError;
use crate::oauth::authorize::LoginSubmission;
use crate::oauth::flow::LoginOutcome;

use super::OAuthState;

/// `POST /login` handler.
///
/// Verifies the submitted credentials and redirects back to the client with
/// a freshly issued authorization code (302), or rejects with an opaque 401.
pub async fn login_handler(
    State(state): State<OAuthState>,
    Form(submission): Form<LoginSubmission>,
) -> Response {
    match state.flow.login(&submission).await {
        Ok(LoginOutcome::Redirect(location)) => {
            (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
        }
        Ok(LoginOutcome::Rejected) => OAuthError::AuthenticationFailed.into_response(),
        Err(error) => error.into_response(),
    }
}
