//! Health endpoints and the protected sample resource.

use axum::Json;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use doorkeep_oauth::BearerAuth;

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "doorkeep",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn healthz() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// `GET /portable_contacts/@me/@self` - the requester's own contact entry.
///
/// Sits behind the bearer gateway: the extractor resolves the token to a
/// live user or rejects the request before this body runs.
pub async fn contact_self(BearerAuth(identity): BearerAuth) -> impl IntoResponse {
    Json(contact_envelope(contact_entry(
        &identity.user.id,
        identity.user.name.as_deref(),
        &identity.user.email,
    )))
}

fn contact_envelope(entry: Value) -> Value {
    json!({
        "startIndex": 0,
        "itemsPerPage": 1,
        "totalResults": 1,
        "entry": [entry],
    })
}

fn contact_entry(id: &str, name: Option<&str>, email: &str) -> Value {
    json!({
        "id": id,
        "displayName": name.unwrap_or(email),
        "emails": [{ "value": email, "primary": true }],
    })
}
