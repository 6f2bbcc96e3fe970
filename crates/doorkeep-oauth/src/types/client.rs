//! OAuth 2.0 client domain type.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An OAuth 2.0 client registration.
///
/// Clients are created out-of-band and looked up read-only during the
/// authorization flow. A registration is immutable once issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier used in OAuth flows.
    pub client_id: String,

    /// Human-readable display name.
    pub name: String,

    /// Registered redirect URI. Compared with exact string equality against
    /// the redirect_uri supplied on authorization requests.
    pub redirect_uri: String,

    /// Client secret (confidential clients only). Not exercised by the
    /// authorization-code flow itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,

    /// When the registration was created.
    #[serde(default = "OffsetDateTime::now_utc", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Client {
    /// Creates a new client registration.
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        name: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            name: name.into(),
            redirect_uri: redirect_uri.into(),
            secret: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_has_no_secret() {
        let client = Client::new("errornot", "ErrorNot", "http://127.0.0.1:8888/login");
        assert_eq!(client.client_id, "errornot");
        assert_eq!(client.redirect_uri, "http://127.0.0.1:8888/login");
        assert!(client.secret.is_none());
    }

    #[test]
    fn client_serde_roundtrip() {
        let client = Client::new("errornot", "ErrorNot", "http://127.0.0.1:8888/login");
        let json = serde_json::to_string(&client).unwrap();
        let back: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(back.client_id, client.client_id);
        assert_eq!(back.redirect_uri, client.redirect_uri);
    }
}
