//! OAuth 2.0 authorization-code flow.
//!
//! The flow is implemented across three submodules:
//!
//! - [`params`] - raw query parameters and the mandatory-parameter check
//! - [`authorize`] - validated request/response types and response-type
//!   dispatch values
//! - [`flow`] - the orchestrating service: validation, client and
//!   redirect-URI binding, response-type dispatch, credential verification,
//!   code issuance, redirect construction

pub mod authorize;
pub mod flow;
pub mod params;

pub use authorize::{
    AuthorizationRequest, AuthorizationResponse, LoginSubmission, ResponseType,
};
pub use flow::{AuthorizationFlow, AuthorizeOutcome, LoginOutcome};
pub use params::RawAuthorizeParams;
