//! OAuth error taxonomy.
//!
//! Every failure in the authorization flow and the token gateway maps to one
//! of these variants. Validation failures carry a fixed kind/description pair
//! that is rendered verbatim into the JSON error envelope; the pairing chosen
//! at validation time is never downgraded on the way out.

/// Errors produced by the authorization flow and the token gateway.
///
/// The first group of variants is the OAuth validation taxonomy: each has a
/// wire-level `kind` and a canonical description, and is rendered as the
/// `OAuthException` JSON envelope with HTTP 400. The remaining variants map
/// to bare status codes (401/404/500/501) without a structured body.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// A mandatory authorization parameter is missing.
    #[error("invalid_request: the request is missing a mandatory parameter")]
    InvalidRequest,

    /// No client is registered under the supplied client_id.
    #[error("invalid_client: no client registered for the given client_id")]
    InvalidClient,

    /// The supplied redirect_uri is not the one registered for the client.
    #[error("redirect_uri_mismatch: the redirect_uri does not match the one registered for the client")]
    RedirectUriMismatch,

    /// The response_type is not a value this server recognizes.
    #[error("unsupported_response_type: the response_type is not supported by this server")]
    UnsupportedResponseType,

    /// The authorization code is unknown, expired, bound to different
    /// parameters, or already exchanged.
    #[error("invalid_grant: the authorization code is invalid, expired, or already used")]
    InvalidGrant,

    /// The grant_type is not a value the token endpoint supports.
    #[error("unsupported_grant_type: the grant_type is not supported by this server")]
    UnsupportedGrantType,

    /// A response_type recognized by the protocol but intentionally not
    /// implemented by this deployment (`token`, `code_and_token`).
    #[error("response_type '{response_type}' is not implemented")]
    NotImplemented {
        /// The recognized-but-unsupported response type.
        response_type: String,
    },

    /// Credential verification failed. Deliberately carries no detail so an
    /// unknown email and a wrong password are indistinguishable.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The bearer token was rejected by the token store.
    #[error("invalid token: {message}")]
    InvalidToken {
        /// Description of why the token was rejected. Logged, never sent.
        message: String,
    },

    /// The token resolved but the user it points at no longer exists.
    #[error("identity no longer exists")]
    IdentityGone,

    /// A backing store failed. Fatal for the current request, never retried.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the storage failure. Logged, never sent.
        message: String,
    },
}

impl OAuthError {
    /// Creates a new `InvalidToken` error.
    #[must_use]
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            message: message.into(),
        }
    }

    /// Creates a new `Storage` error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Creates a new `NotImplemented` error.
    #[must_use]
    pub fn not_implemented(response_type: impl Into<String>) -> Self {
        Self::NotImplemented {
            response_type: response_type.into(),
        }
    }

    /// Returns the wire-level error kind for validation errors that render
    /// as the JSON envelope, `None` for bare-status errors.
    #[must_use]
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRequest => Some("invalid_request"),
            Self::InvalidClient => Some("invalid_client"),
            Self::RedirectUriMismatch => Some("redirect_uri_mismatch"),
            Self::UnsupportedResponseType => Some("unsupported_response_type"),
            Self::InvalidGrant => Some("invalid_grant"),
            Self::UnsupportedGrantType => Some("unsupported_grant_type"),
            _ => None,
        }
    }
}
