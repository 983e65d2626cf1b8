//! Query parameters for the authorization server endpoints
//!
//! Optional parameters are skipped during serialization so they never reach
//! the wire as empty or null values.

use serde::Serialize;

use crate::constants::{DEFAULT_RESPONSE_TYPE, GRANT_AUTHORIZATION_CODE, GRANT_REFRESH_TOKEN};
use crate::error::{Error, Result};

/// Caller-supplied part of the authorization request.
///
/// `client_id` is not part of this type; the session injects it from the
/// stored credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub redirect_uri: String,
    pub response_type: String,
    pub state: Option<String>,
    pub redirect_on_deny: bool,
}

impl AuthorizationRequest {
    /// Request with `response_type=code`, no state, `redirect_on_deny=false`.
    pub fn new(redirect_uri: impl Into<String>) -> Self {
        Self {
            redirect_uri: redirect_uri.into(),
            response_type: DEFAULT_RESPONSE_TYPE.to_owned(),
            state: None,
            redirect_on_deny: false,
        }
    }

    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = response_type.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn redirect_on_deny(mut self, redirect_on_deny: bool) -> Self {
        self.redirect_on_deny = redirect_on_deny;
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AuthorizeQuery<'a> {
    pub response_type: &'a str,
    pub client_id: &'a str,
    pub redirect_uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    pub redirect_on_deny: bool,
}

impl<'a> AuthorizeQuery<'a> {
    pub fn new(client_id: &'a str, request: &'a AuthorizationRequest) -> Result<Self> {
        require("redirect_uri", &request.redirect_uri)?;
        require("response_type", &request.response_type)?;
        Ok(Self {
            response_type: &request.response_type,
            client_id,
            redirect_uri: &request.redirect_uri,
            state: request.state.as_deref(),
            redirect_on_deny: request.redirect_on_deny,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ExchangeQuery<'a> {
    pub code: &'a str,
    pub redirect_uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'a str>,
    pub grant_type: &'static str,
}

impl<'a> ExchangeQuery<'a> {
    pub fn new(code: &'a str, redirect_uri: &'a str, state: Option<&'a str>) -> Result<Self> {
        require("code", code)?;
        require("redirect_uri", redirect_uri)?;
        Ok(Self {
            code,
            redirect_uri,
            state,
            grant_type: GRANT_AUTHORIZATION_CODE,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshQuery<'a> {
    pub grant_type: &'static str,
    pub refresh_token: &'a str,
}

impl<'a> RefreshQuery<'a> {
    pub fn new(refresh_token: &'a str) -> Result<Self> {
        require("refresh_token", refresh_token)?;
        Ok(Self {
            grant_type: GRANT_REFRESH_TOKEN,
            refresh_token,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RevokeQuery<'a> {
    pub token: &'a str,
}

impl<'a> RevokeQuery<'a> {
    pub fn new(token: &'a str) -> Result<Self> {
        require("token", token)?;
        Ok(Self { token })
    }
}

/// Reject empty required parameters before any request is sent.
fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!("{name} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_request_defaults() {
        let request = AuthorizationRequest::new("https://app/cb");
        assert_eq!(request.response_type, "code");
        assert_eq!(request.state, None);
        assert!(!request.redirect_on_deny);
    }

    #[test]
    fn authorization_request_builder_sets_fields() {
        let request = AuthorizationRequest::new("https://app/cb")
            .response_type("token")
            .state("xyz")
            .redirect_on_deny(true);
        assert_eq!(request.response_type, "token");
        assert_eq!(request.state.as_deref(), Some("xyz"));
        assert!(request.redirect_on_deny);
    }

    #[test]
    fn authorize_query_skips_missing_state() {
        let request = AuthorizationRequest::new("https://app/cb");
        let query = AuthorizeQuery::new("abc", &request).unwrap();
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("state").is_none());
        assert_eq!(json["redirect_on_deny"], false);
        assert_eq!(json["client_id"], "abc");
    }

    #[test]
    fn empty_required_params_are_rejected() {
        let request = AuthorizationRequest::new("");
        assert!(matches!(
            AuthorizeQuery::new("abc", &request),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(
            ExchangeQuery::new("", "https://app/cb", None),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(
            ExchangeQuery::new("c1", "", None),
            Err(Error::InvalidRequest(_))
        ));
        assert!(matches!(RefreshQuery::new(""), Err(Error::InvalidRequest(_))));
        assert!(matches!(RevokeQuery::new(""), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn error_names_the_missing_parameter() {
        let err = RefreshQuery::new("").unwrap_err();
        assert_eq!(err.to_string(), "invalid request: refresh_token must not be empty");
    }
}
