//! User domain type.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A user of the authorization server.
///
/// Users authenticate with email and password during the authorization-code
/// flow, and are re-resolved by id on every gatewayed resource request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,

    /// Email address, used as the login identifier.
    pub email: String,

    /// Full display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Argon2-hashed password. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,

    /// When the user was created.
    #[serde(default = "OffsetDateTime::now_utc", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// Creates a new user with a generated id and no password.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            name: None,
            password_hash: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
