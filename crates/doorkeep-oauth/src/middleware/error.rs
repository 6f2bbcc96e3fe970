//! Error response rendering.
//!
//! Implements `IntoResponse` for [`OAuthError`] so handlers and extractors
//! can terminate a request with the right wire shape:
//!
//! - validation errors: HTTP 400 with the uniform `OAuthException` envelope
//!   `{"error":{"type":"OAuthException","message":"<kind>: <text>"}}`
//! - authentication failures: bare 401, no body (opaque on purpose)
//! - gateway rejections: 401 with `WWW-Authenticate: Bearer`, 404, or 500
//! - unimplemented response types: bare 501

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::OAuthError;

impl IntoResponse for OAuthError {
    fn into_response(self) -> Response {
        if let Some(_kind) = self.kind() {
            // Display pairs the kind with its canonical description, exactly
            // as fixed at validation time.
            let body = json!({
                "error": {
                    "type": "OAuthException",
                    "message": self.to_string(),
                }
            });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        match self {
            OAuthError::NotImplemented { response_type } => {
                tracing::debug!(%response_type, "returning 501 for unimplemented response_type");
                StatusCode::NOT_IMPLEMENTED.into_response()
            }
            OAuthError::AuthenticationFailed => {
                // No body, no detail: unknown email and wrong password must
                // be indistinguishable.
                StatusCode::UNAUTHORIZED.into_response()
            }
            OAuthError::InvalidToken { message } => {
                tracing::debug!(%message, "rejecting bearer token");
                let mut headers = HeaderMap::new();
                headers.insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer realm=\"doorkeep\""),
                );
                (StatusCode::UNAUTHORIZED, headers).into_response()
            }
            OAuthError::IdentityGone => StatusCode::NOT_FOUND.into_response(),
            OAuthError::Storage { message } => {
                tracing::error!(%message, "storage fault, aborting request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            // Envelope kinds were handled above.
            _ => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_len(response: Response) -> usize {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().len()
    }

    #[tokio::test]
    async fn invalid_request_renders_envelope() {
        let response = OAuthError::InvalidRequest.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_json_eq!(
            json,
            serde_json::json!({
                "error": {
                    "type": "OAuthException",
                    "message": "invalid_request: the request is missing a mandatory parameter",
                }
            })
        );
    }

    #[tokio::test]
    async fn every_validation_kind_is_400_with_envelope() {
        for error in [
            OAuthError::InvalidRequest,
            OAuthError::InvalidClient,
            OAuthError::RedirectUriMismatch,
            OAuthError::UnsupportedResponseType,
            OAuthError::InvalidGrant,
            OAuthError::UnsupportedGrantType,
        ] {
            let expected_message = error.to_string();
            let expected_kind = error.kind().unwrap();
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["error"]["type"], "OAuthException");
            let message = json["error"]["message"].as_str().unwrap();
            assert_eq!(message, expected_message);
            assert!(message.starts_with(&format!("{expected_kind}: ")));
        }
    }

    #[tokio::test]
    async fn authentication_failure_is_bare_401() {
        let response = OAuthError::AuthenticationFailed.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn gateway_rejection_is_401_with_www_authenticate() {
        let response = OAuthError::invalid_token("expired").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let www = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(www.starts_with("Bearer"));
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn not_implemented_is_bare_501() {
        let response = OAuthError::not_implemented("token").into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn identity_gone_is_404() {
        let response = OAuthError::IdentityGone.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn storage_fault_is_opaque_500() {
        let response = OAuthError::storage("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // The caller never sees the fault detail.
        assert_eq!(body_len(response).await, 0);
    }
}
