//! Raw authorization parameters and the mandatory-parameter check.
//!
//! This is the first step of the flow: presence checking only. Syntactic
//! validation of the redirect_uri and dispatch on the response_type value
//! happen later in the pipeline.

use serde::Deserialize;

use crate::error::OAuthError;
use crate::oauth::authorize::AuthorizationRequest;

/// The parameters every authorization request must carry.
pub const MANDATORY_PARAMS: [&str; 3] = ["client_id", "response_type", "redirect_uri"];

/// Raw query parameters of an authorization request, before validation.
///
/// All fields are optional at this stage so the validator, not the
/// deserializer, decides what a missing parameter means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthorizeParams {
    /// Client identifier.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Requested response type.
    #[serde(default)]
    pub response_type: Option<String>,

    /// Redirect URI for the response.
    #[serde(default)]
    pub redirect_uri: Option<String>,

    /// Opaque state echoed back on the redirect.
    #[serde(default)]
    pub state: Option<String>,
}

impl RawAuthorizeParams {
    /// Checks completeness and produces a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::InvalidRequest`] if any mandatory parameter is
    /// missing or empty, regardless of which one.
    pub fn validate(&self) -> Result<AuthorizationRequest, OAuthError> {
        let client_id = require(&self.client_id)?;
        let response_type = require(&self.response_type)?;
        let redirect_uri = require(&self.redirect_uri)?;

        Ok(AuthorizationRequest {
            client_id,
            response_type,
            redirect_uri,
            state: self.state.clone(),
        })
    }
}

fn require(value: &Option<String>) -> Result<String, OAuthError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(OAuthError::InvalidRequest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RawAuthorizeParams {
        RawAuthorizeParams {
            client_id: Some("errornot".to_string()),
            response_type: Some("code".to_string()),
            redirect_uri: Some("http://127.0.0.1:8888/login".to_string()),
            state: Some("somestate".to_string()),
        }
    }

    #[test]
    fn complete_params_validate() {
        let request = complete().validate().unwrap();
        assert_eq!(request.client_id, "errornot");
        assert_eq!(request.response_type, "code");
        assert_eq!(request.redirect_uri, "http://127.0.0.1:8888/login");
        assert_eq!(request.state.as_deref(), Some("somestate"));
    }

    #[test]
    fn each_missing_mandatory_param_is_invalid_request() {
        // Every mandatory field, dropped independently, triggers the same
        // error kind.
        let variants: [Box<dyn Fn(&mut RawAuthorizeParams)>; 3] = [
            Box::new(|p| p.client_id = None),
            Box::new(|p| p.response_type = None),
            Box::new(|p| p.redirect_uri = None),
        ];
        for strip in variants {
            let mut params = complete();
            strip(&mut params);
            let err = params.validate().unwrap_err();
            assert!(matches!(err, OAuthError::InvalidRequest));
        }
    }

    #[test]
    fn empty_mandatory_param_is_invalid_request() {
        let mut params = complete();
        params.redirect_uri = Some(String::new());
        assert!(matches!(
            params.validate().unwrap_err(),
            OAuthError::InvalidRequest
        ));
    }

    #[test]
    fn no_params_at_all_is_invalid_request() {
        let err = RawAuthorizeParams::default().validate().unwrap_err();
        assert!(matches!(err, OAuthError::InvalidRequest));
    }

    #[test]
    fn state_is_optional() {
        let mut params = complete();
        params.state = None;
        let request = params.validate().unwrap();
        assert!(request.state.is_none());
    }

    #[test]
    fn response_type_value_is_not_checked_here() {
        // Only presence matters at this layer; dispatch happens later.
        let mut params = complete();
        params.response_type = Some("wrong".to_string());
        assert!(params.validate().is_ok());
    }
}
