//! Identity attached to gatewayed requests.

use crate::types::User;

/// The identity the gateway resolves for a protected resource request.
///
/// Attaching this to the request is the gateway's sole side effect and the
/// sole contract surface toward resource handlers.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    /// User id from the token grant.
    pub user_id: String,

    /// Client id from the token grant.
    pub client_id: String,

    /// The user record, re-resolved at request time. Guaranteed to exist:
    /// requests for deleted users never reach a handler.
    pub user: User,
}
