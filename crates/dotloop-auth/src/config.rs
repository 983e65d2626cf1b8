//! Configuration loading
//!
//! There is no config file: the client id, secret, and optional base URL
//! come from the environment. The secret may instead be read from a file
//! named by `DOTLOOP_CLIENT_SECRET_FILE`; the env var takes precedence.

use std::path::PathBuf;

use common::Secret;

use crate::constants::BASE_URL;
use crate::credentials::Credentials;

pub const CLIENT_ID_ENV: &str = "DOTLOOP_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "DOTLOOP_CLIENT_SECRET";
pub const CLIENT_SECRET_FILE_ENV: &str = "DOTLOOP_CLIENT_SECRET_FILE";
pub const BASE_URL_ENV: &str = "DOTLOOP_AUTH_BASE_URL";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub base_url: String,
}

impl AuthConfig {
    /// Load from the process environment.
    pub fn from_env() -> common::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    ///
    /// Secret resolution order:
    /// 1. DOTLOOP_CLIENT_SECRET
    /// 2. contents of DOTLOOP_CLIENT_SECRET_FILE, trimmed
    pub fn from_lookup<F>(lookup: F) -> common::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = non_empty(CLIENT_ID_ENV)
            .ok_or_else(|| common::Error::Config(format!("{CLIENT_ID_ENV} is not set")))?;

        let client_secret = if let Some(secret) = non_empty(CLIENT_SECRET_ENV) {
            Secret::new(secret)
        } else if let Some(path) = non_empty(CLIENT_SECRET_FILE_ENV) {
            read_secret_file(PathBuf::from(path))?
        } else {
            return Err(common::Error::Config(format!(
                "neither {CLIENT_SECRET_ENV} nor {CLIENT_SECRET_FILE_ENV} is set"
            )));
        };

        let base_url = non_empty(BASE_URL_ENV).unwrap_or_else(|| BASE_URL.to_owned());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(common::Error::Config(format!(
                "{BASE_URL_ENV} must start with http:// or https://, got: {base_url}"
            )));
        }

        Ok(Self {
            client_id,
            client_secret,
            base_url,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::from((self.client_id.clone(), self.client_secret.clone()))
    }
}

fn read_secret_file(path: PathBuf) -> common::Result<Secret<String>> {
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        common::Error::Config(format!(
            "failed to read {CLIENT_SECRET_FILE_ENV} {}: {e}",
            path.display()
        ))
    })?;
    let secret = contents.trim().to_owned();
    if secret.is_empty() {
        return Err(common::Error::Config(format!(
            "{CLIENT_SECRET_FILE_ENV} {} is empty",
            path.display()
        )));
    }
    Ok(Secret::new(secret))
}
