//! Authenticator and its scoped session
//!
//! The `Authenticator` owns the client credentials and the base URL. Calling
//! `open()` acquires a `Session`: one reusable HTTP connection pool that lives
//! until the session is closed or dropped. All four endpoint calls go through
//! the session:
//! 1. `authorization_url()`: GET `authorize`
//! 2. `exchange_code()`: POST `token`, grant_type=authorization_code
//! 3. `refresh_access_token()`: POST `token`, grant_type=refresh_token
//! 4. `revoke_access()`: POST `token/revoke`
//!
//! Only the two `token` calls carry Basic auth. The revoke call is sent
//! without an Authorization header.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::redirect::Policy;
use tracing::{debug, warn};
use url::Url;

use crate::config::AuthConfig;
use crate::constants::{AUTHORIZE_PATH, BASE_URL, REVOKE_PATH, TOKEN_PATH};
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::request::{AuthorizationRequest, AuthorizeQuery, ExchangeQuery, RefreshQuery, RevokeQuery};

/// Response body of any successful call, returned exactly as decoded.
///
/// Token payloads usually carry `access_token`, `refresh_token`,
/// `expires_in`, and `scope`, but no field is interpreted here.
pub type TokenResponse = serde_json::Value;

/// Long-lived holder of client credentials.
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    base_url: String,
}

impl Authenticator {
    /// Authenticator against the production authorization server.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_credentials(Credentials::new(client_id, client_secret))
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: BASE_URL.to_owned(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            credentials: config.credentials(),
            base_url: config.base_url.clone(),
        }
    }

    /// Point at a different authorization server. A missing trailing slash
    /// is added when the session opens.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Acquire a session.
    ///
    /// The connection pool is released when the returned guard is closed or
    /// dropped, including on early returns and unwinding.
    pub fn open(&self) -> Result<Session<'_>> {
        let base_url = parse_base_url(&self.base_url)?;

        // Redirects are reported to the caller as failures, not followed
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .map_err(|e| Error::Client(format!("building HTTP client: {e}")))?;

        debug!(base_url = %base_url, "opened dotloop auth session");
        Ok(Session {
            credentials: &self.credentials,
            base_url,
            client,
        })
    }
}

/// Scoped HTTP session bound to an `Authenticator`.
///
/// Not meant to be shared between threads; open one session per task.
pub struct Session<'a> {
    credentials: &'a Credentials,
    base_url: Url,
    client: reqwest::Client,
}

impl Session<'_> {
    /// Request the authorization URL payload.
    ///
    /// dotloop answers with JSON describing where to send the user, not with
    /// an HTTP redirect.
    pub async fn authorization_url(&self, request: &AuthorizationRequest) -> Result<TokenResponse> {
        let request = self.authorize_request(request)?;
        self.execute("authorize", request).await
    }

    /// Exchange an authorization code for access and refresh tokens.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<TokenResponse> {
        let request = self.exchange_request(code, redirect_uri, state)?;
        self.execute("exchange_code", request).await
    }

    /// Obtain a new access token from a refresh token.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenResponse> {
        let request = self.refresh_request(refresh_token)?;
        self.execute("refresh_access_token", request).await
    }

    /// Revoke an access token.
    pub async fn revoke_access(&self, access_token: &str) -> Result<TokenResponse> {
        let request = self.revoke_request(access_token)?;
        self.execute("revoke_access", request).await
    }

    /// Release the session explicitly.
    pub fn close(self) {
        drop(self);
    }

    fn authorize_request(&self, request: &AuthorizationRequest) -> Result<reqwest::Request> {
        let query = AuthorizeQuery::new(self.credentials.client_id(), request)?;
        self.client
            .get(self.endpoint(AUTHORIZE_PATH)?)
            .query(&query)
            .build()
            .map_err(|e| Error::InvalidRequest(format!("building authorize request: {e}")))
    }

    fn exchange_request(
        &self,
        code: &str,
        redirect_uri: &str,
        state: Option<&str>,
    ) -> Result<reqwest::Request> {
        let query = ExchangeQuery::new(code, redirect_uri, state)?;
        self.client
            .post(self.endpoint(TOKEN_PATH)?)
            .query(&query)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.basic_auth()?)
            .build()
            .map_err(|e| Error::InvalidRequest(format!("building token request: {e}")))
    }

    fn refresh_request(&self, refresh_token: &str) -> Result<reqwest::Request> {
        let query = RefreshQuery::new(refresh_token)?;
        self.client
            .post(self.endpoint(TOKEN_PATH)?)
            .query(&query)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.basic_auth()?)
            .build()
            .map_err(|e| Error::InvalidRequest(format!("building refresh request: {e}")))
    }

    fn revoke_request(&self, access_token: &str) -> Result<reqwest::Request> {
        let query = RevokeQuery::new(access_token)?;
        self.client
            .post(self.endpoint(REVOKE_PATH)?)
            .query(&query)
            .build()
            .map_err(|e| Error::InvalidRequest(format!("building revoke request: {e}")))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidBaseUrl(format!("joining {path}: {e}")))
    }

    fn basic_auth(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&self.credentials.basic_auth_header())
            .map_err(|e| Error::InvalidRequest(format!("invalid Authorization header: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }

    async fn execute(&self, operation: &'static str, request: reqwest::Request) -> Result<TokenResponse> {
        debug!(
            operation,
            method = %request.method(),
            path = request.url().path(),
            "sending dotloop auth request"
        );

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::Http(format!("{operation} request failed: {e}")))?;

        interpret(operation, response).await
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        debug!(base_url = %self.base_url, "closed dotloop auth session");
    }
}

/// Map a response onto the success/failure contract.
///
/// 2xx yields the decoded JSON body (an empty body decodes to `null`).
/// Any other status yields `Error::Auth` carrying the raw body text.
async fn interpret(operation: &'static str, response: reqwest::Response) -> Result<TokenResponse> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("reading {operation} error body: {e}")))?;
        warn!(operation, status = status.as_u16(), "dotloop auth request rejected");
        return Err(Error::Auth {
            status_code: status.as_u16(),
            body,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Http(format!("reading {operation} response body: {e}")))?;
    if bytes.is_empty() {
        return Ok(TokenResponse::Null);
    }

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::Decode(format!("{operation} response: {e}")))
}

/// Parse the base URL, forcing a trailing slash so relative joins keep the
/// last path segment (`oauth/` + `token` → `oauth/token`).
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&normalized).map_err(|e| Error::InvalidBaseUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl(format!("{raw}: cannot be a base URL")));
    }
    Ok(url)
}
