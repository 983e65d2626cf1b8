//! dotloop OAuth2 authorization-code client
//!
//! Issues the authorization-server calls needed to obtain and manage dotloop
//! API tokens. Responses are passed through as JSON; nothing is stored and
//! nothing is retried.
//!
//! Flow:
//! 1. Build an `Authenticator` from client credentials (or `AuthConfig::from_env()`)
//! 2. `Authenticator::open()` acquires a `Session`
//! 3. `Session::authorization_url()` returns where to send the user
//! 4. `Session::exchange_code()` trades the callback code for tokens
//! 5. `Session::refresh_access_token()` renews an expired access token
//! 6. `Session::revoke_access()` invalidates a token
//!
//! Non-2xx responses surface as `Error::Auth { status_code, body }`.

pub mod authenticator;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod request;

pub use authenticator::{Authenticator, Session, TokenResponse};
pub use config::AuthConfig;
pub use constants::*;
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use request::AuthorizationRequest;
