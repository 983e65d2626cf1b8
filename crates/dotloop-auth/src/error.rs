//! Error types for dotloop OAuth operations

/// Errors from dotloop OAuth operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The authorization server answered outside 2xx. `body` is the raw
    /// response text.
    #[error("dotloop returned {status_code}: {body}")]
    Auth { status_code: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("invalid JSON response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl Error {
    /// HTTP status of an `Auth` failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Auth { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Raw response body of an `Auth` failure.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Auth { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_exposes_status_and_body() {
        let err = Error::Auth {
            status_code: 401,
            body: "invalid_client".into(),
        };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.body(), Some("invalid_client"));
        assert_eq!(err.to_string(), "dotloop returned 401: invalid_client");
    }

    #[test]
    fn other_errors_have_no_status() {
        let err = Error::Http("connection refused".into());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.body(), None);
    }
}
