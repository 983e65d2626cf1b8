//! OAuth client credentials
//!
//! The client id/secret pair issued by dotloop. Both token endpoint calls
//! authenticate with HTTP Basic built from this pair.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::Secret;

/// Client id and secret, immutable after construction.
#[derive(Debug, Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: Secret<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// `Authorization` header value: `Basic base64(client_id:client_secret)`.
    pub fn basic_auth_header(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret.expose());
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl From<(String, Secret<String>)> for Credentials {
    fn from((client_id, client_secret): (String, Secret<String>)) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }
}
