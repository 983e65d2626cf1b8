//! Common error types

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result alias using common Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_context() {
        let config_err = Error::Config("missing DOTLOOP_CLIENT_ID".into());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: missing DOTLOOP_CLIENT_ID"
        );

        let logging_err = Error::Logging("subscriber already set".into());
        assert!(
            logging_err.to_string().starts_with("Logging error:"),
            "got: {}",
            logging_err
        );
    }

    #[test]
    fn error_debug_includes_variant() {
        let err = Error::Config("bad value".into());
        let debug = format!("{:?}", err);
        assert!(
            debug.contains("Config"),
            "Debug should include variant name, got: {debug}"
        );
    }
}
