//! Authorization endpoint request and response types.
//!
//! # Authorization Code Flow
//!
//! 1. The browser hits `GET /oauth/authorize` with request parameters
//! 2. The server validates the request and renders a login form
//! 3. The user submits credentials to `POST /login`
//! 4. The server redirects back to the client with an authorization code
//! 5. The client exchanges the code for a bearer token at the token endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// The response_type values recognized by the protocol.
///
/// Dispatch on this enum is exhaustive: `token` and `code_and_token` are
/// recognized but hit an explicit not-implemented arm, so adding support for
/// them later is a compile-time-visible decision rather than a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Authorization-code grant. The only type this deployment implements.
    Code,
    /// Implicit grant. Recognized, intentionally not implemented.
    Token,
    /// Hybrid grant. Recognized, intentionally not implemented.
    CodeAndToken,
}

impl ResponseType {
    /// Parses a wire-level response_type value.
    ///
    /// Returns `None` for values the protocol does not define, which callers
    /// report as `unsupported_response_type`.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "code" => Some(Self::Code),
            "token" => Some(Self::Token),
            "code_and_token" => Some(Self::CodeAndToken),
            _ => None,
        }
    }

    /// Returns the wire-level parameter value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Token => "token",
            Self::CodeAndToken => "code_and_token",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated authorization request.
///
/// Produced by the parameter validator once all mandatory parameters are
/// present. `response_type` stays a raw string here: per the dispatch order,
/// its value is only examined after the client and redirect-URI bindings
/// have been checked.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Client identifier.
    pub client_id: String,

    /// Raw response_type value, dispatched later in the flow.
    pub response_type: String,

    /// Redirect URI where the code will be sent.
    pub redirect_uri: String,

    /// Opaque client state, echoed back verbatim on the redirect.
    pub state: Option<String>,
}

/// Login form submission, carrying the echoed authorization parameters.
///
/// The hidden fields echo the values already validated on the authorize
/// request; the flow trusts them rather than re-running the binding checks.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginSubmission {
    /// Echoed client identifier.
    pub client_id: String,

    /// Echoed response type.
    pub response_type: String,

    /// Echoed redirect URI.
    pub redirect_uri: String,

    /// Echoed opaque state, if the client supplied one.
    #[serde(default)]
    pub state: Option<String>,

    /// Login email.
    pub email: String,

    /// Login password.
    pub password: String,
}

/// Successful authorization response parameters.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationResponse {
    /// Authorization code to be exchanged for a token.
    pub code: String,

    /// Echoed state parameter, if supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AuthorizationResponse {
    /// Creates a new authorization response.
    #[must_use]
    pub fn new(code: String, state: Option<String>) -> Self {
        Self { code, state }
    }

    /// Builds the redirect location for the response.
    ///
    /// The state value is appended byte-for-byte, never re-encoded or
    /// interpreted. The code itself is base64url and needs no escaping.
    #[must_use]
    pub fn to_redirect_url(&self, redirect_uri: &str) -> String {
        let mut location = format!("{redirect_uri}?code={}", self.code);
        if let Some(state) = &self.state {
            location.push_str("&state=");
            location.push_str(state);
        }
        location
    }
}
