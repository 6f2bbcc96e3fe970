//! Authorization endpoint handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::oauth::flow::AuthorizeOutcome;
use crate::oauth::params::RawAuthorizeParams;

use super::OAuthState;
use super::templates::render_login_form;

/// `GET /oauth/authorize` handler.
///
/// Runs the validation pipeline and either renders the login form (200),
/// returns 501 for recognized-but-unsupported response types, or terminates
/// with the error envelope (400).
pub async fn authorize_handler(
    State(state): State<OAuthState>,
    Query(params): Query<RawAuthorizeParams>,
) -> Response {
    match state.flow.begin(&params).await {
        Ok(AuthorizeOutcome::LoginPrompt(request)) => {
            (StatusCode::OK, Html(render_login_form(&request))).into_response()
        }
        Ok(AuthorizeOutcome::NotImplemented(response_type)) => {
            tracing::debug!(%response_type, "authorization declined, response_type not implemented");
            StatusCode::NOT_IMPLEMENTED.into_response()
        }
        Err(error) => error.into_response(),
    }
}
