//! Authorization code entity and opaque value generation.
//!
//! Authorization codes are single-use: minted on successful login, bound to
//! the (client, user, redirect_uri) triple of the authorizing request, and
//! invalidated on first exchange.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

/// Generates a cryptographically unguessable opaque value.
///
/// 256 bits (32 bytes) of random data, encoded as base64url without padding
/// (43 characters). Used for authorization codes and bearer tokens.
#[must_use]
pub fn random_opaque() -> String {
    let mut bytes = [0u8; 32];
    rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// A single-use authorization code and its bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationCode {
    /// The opaque code value handed to the client via redirect.
    pub code: String,

    /// Client the code was issued for.
    pub client_id: String,

    /// User who authorized the request.
    pub user_id: String,

    /// Redirect URI the code is bound to. Must be presented unchanged at
    /// exchange time.
    pub redirect_uri: String,

    /// When the code was issued.
    #[serde(with = "time::serde::rfc3339")]
    pub issued_at: OffsetDateTime,

    /// When the code stops being exchangeable.
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,

    /// When the code was exchanged. `None` until first use.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub consumed_at: Option<OffsetDateTime>,
}

impl AuthorizationCode {
    /// Mints a new code bound to the given triple, valid for `lifetime`.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        user_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            code: random_opaque(),
            client_id: client_id.into(),
            user_id: user_id.into(),
            redirect_uri: redirect_uri.into(),
            issued_at: now,
            expires_at: now + lifetime,
            consumed_at: None,
        }
    }

    /// Returns `true` if the code has passed its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        OffsetDateTime::now_utc() > self.expires_at
    }

    /// Returns `true` if the code has already been exchanged.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Returns `true` if the code can still be exchanged.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_expired() && !self.is_consumed()
    }

    /// Returns `true` if the presented exchange parameters match the
    /// bindings recorded at issuance.
    #[must_use]
    pub fn matches_binding(&self, client_id: &str, redirect_uri: &str) -> bool {
        self.client_id == client_id && self.redirect_uri == redirect_uri
    }
}
