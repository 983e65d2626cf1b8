//! dotloop OAuth constants
//!
//! Endpoint paths are relative to `BASE_URL` and resolved with a URL join,
//! so the base must keep its trailing slash.

/// Authorization server base URL
pub const BASE_URL: &str = "https://auth.dotloop.com/oauth/";

/// Authorization endpoint (returns a redirect-URL payload, not a redirect)
pub const AUTHORIZE_PATH: &str = "authorize";

/// Token endpoint for code exchange and token refresh
pub const TOKEN_PATH: &str = "token";

/// Token revocation endpoint
pub const REVOKE_PATH: &str = "token/revoke";

/// Default `response_type` for the authorization request
pub const DEFAULT_RESPONSE_TYPE: &str = "code";

pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";
