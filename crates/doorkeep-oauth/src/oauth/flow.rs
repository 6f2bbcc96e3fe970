//! The authorization flow service.
//!
//! Orchestrates the authorization-code issuance pipeline in strict order:
//! parameter validation, client lookup, redirect-URI binding, response-type
//! dispatch, and (on login submission) credential verification, code
//! issuance, and redirect construction.
//!
//! Each step either terminates the request or advances; no step is left
//! partially applied on failure. A rejected login never issues a code.

use std::sync::Arc;

use crate::AuthResult;
use crate::error::OAuthError;
use crate::oauth::authorize::{
    AuthorizationRequest, AuthorizationResponse, LoginSubmission, ResponseType,
};
use crate::oauth::params::RawAuthorizeParams;
use crate::storage::{ClientStorage, CodeStorage, UserStorage, Verification};

/// Terminal outcome of a validated authorization request.
#[derive(Debug, Clone)]
pub enum AuthorizeOutcome {
    /// The request is valid; present a login prompt to the user.
    LoginPrompt(AuthorizationRequest),
    /// The response_type is recognized by the protocol but intentionally not
    /// implemented by this deployment.
    NotImplemented(ResponseType),
}

/// Terminal outcome of a login submission.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials accepted; redirect to this location with the issued code.
    Redirect(String),
    /// Credentials rejected. Opaque on purpose: unknown email and wrong
    /// password land here identically.
    Rejected,
}

/// The authorization-code issuance state machine.
///
/// Single-request-scoped from the caller's perspective: each method runs the
/// pipeline to a terminal outcome for one HTTP exchange. Concurrent
/// authorization attempts are independent.
pub struct AuthorizationFlow {
    client_storage: Arc<dyn ClientStorage>,
    user_storage: Arc<dyn UserStorage>,
    code_storage: Arc<dyn CodeStorage>,
}

impl AuthorizationFlow {
    /// Creates a new flow over the given stores.
    #[must_use]
    pub fn new(
        client_storage: Arc<dyn ClientStorage>,
        user_storage: Arc<dyn UserStorage>,
        code_storage: Arc<dyn CodeStorage>,
    ) -> Self {
        Self {
            client_storage,
            user_storage,
            code_storage,
        }
    }

    /// Runs steps 1-4 of the flow for a `GET /oauth/authorize` request.
    ///
    /// Order matters and is part of the contract:
    ///
    /// 1. Mandatory-parameter check
    /// 2. Client registry lookup. This runs before the redirect comparison
    ///    so a caller cannot probe redirect URIs of unknown clients.
    /// 3. Exact-equality redirect_uri binding
    /// 4. Response-type dispatch
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered, or a storage error if
    /// a backing store fails.
    pub async fn begin(&self, params: &RawAuthorizeParams) -> AuthResult<AuthorizeOutcome> {
        let request = params.validate()?;

        let client = self
            .client_storage
            .find_by_client_id(&request.client_id)
            .await?
            .ok_or(OAuthError::InvalidClient)?;

        if client.redirect_uri != request.redirect_uri {
            tracing::debug!(
                client_id = %request.client_id,
                "redirect_uri does not match registration"
            );
            return Err(OAuthError::RedirectUriMismatch);
        }

        match ResponseType::from_param(&request.response_type) {
            Some(ResponseType::Code) => Ok(AuthorizeOutcome::LoginPrompt(request)),
            Some(unimplemented) => {
                tracing::debug!(response_type = %unimplemented, "response_type not implemented");
                Ok(AuthorizeOutcome::NotImplemented(unimplemented))
            }
            None => Err(OAuthError::UnsupportedResponseType),
        }
    }

    /// Runs step 5 of the flow for a `POST /login` submission.
    ///
    /// The echoed client_id/redirect_uri/response_type are the values already
    /// validated on the authorize request and are trusted as-is. Credentials
    /// are verified as a single collapsed outcome, and only a verified login
    /// reaches code issuance.
    ///
    /// # Errors
    ///
    /// Returns a storage error if credential verification or code issuance
    /// hits a backing-store fault. A credential mismatch is not an error but
    /// [`LoginOutcome::Rejected`].
    pub async fn login(&self, submission: &LoginSubmission) -> AuthResult<LoginOutcome> {
        let user = match self
            .user_storage
            .verify_credentials(&submission.email, &submission.password)
            .await?
        {
            Verification::Verified(user) => user,
            Verification::Failed => return Ok(LoginOutcome::Rejected),
        };

        let code = self
            .code_storage
            .create(&submission.client_id, &user.id, &submission.redirect_uri)
            .await?;

        tracing::debug!(
            client_id = %submission.client_id,
            user_id = %user.id,
            "authorization code issued"
        );

        let location = AuthorizationResponse::new(code.code, submission.state.clone())
            .to_redirect_url(&submission.redirect_uri);
        Ok(LoginOutcome::Redirect(location))
    }
}
