//! # Connection settings
//!
//! Values are read from the process environment and fall back to the demo
//! account defaults below. `main` loads `.env` into the environment first.
//!
//! - `COSMOS_MONGO_URI`: MongoDB connection string
//! - `COSMOS_MONGO_USERNAME`: account name
//! - `COSMOS_MONGO_PASSWORD`: account key

use std::fmt;

pub const URI_ENV: &str = "COSMOS_MONGO_URI";
pub const USERNAME_ENV: &str = "COSMOS_MONGO_USERNAME";
pub const PASSWORD_ENV: &str = "COSMOS_MONGO_PASSWORD";

pub const DEFAULT_URI: &str = "mongodb://cosmos-demo.mongo.cosmos.azure.com:10255/?ssl=true";
pub const DEFAULT_USERNAME: &str = "atul";
/// Placeholder key of the demo account. Never valid against a real account.
pub const PLACEHOLDER_PASSWORD: &str = "ChangeMe123!";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub uri: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Resolves the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the settings against an arbitrary lookup. Unset and empty
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            uri: resolve(URI_ENV, DEFAULT_URI),
            username: resolve(USERNAME_ENV, DEFAULT_USERNAME),
            password: resolve(PASSWORD_ENV, PLACEHOLDER_PASSWORD),
        }
    }

    /// Replaces resolved values with the ones given on the command line.
    pub fn with_overrides(
        mut self,
        uri: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        if let Some(uri) = uri {
            self.uri = uri;
        }
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(password) = password {
            self.password = password;
        }
        self
    }

    pub fn uses_placeholder_password(&self) -> bool {
        self.password == PLACEHOLDER_PASSWORD
    }

    /// Logs a warning if the final settings still carry the placeholder.
    /// Call once command-line overrides have been applied.
    pub fn warn_if_placeholder(&self) {
        if self.uses_placeholder_password() {
            log::warn!("{PASSWORD_ENV} is not set, using the placeholder password");
        }
    }
}

/// Replaces the user info of a connection string so it can be logged.
pub fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());

    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{scheme}://<redacted>{}", &rest[at..]),
        None => uri.to_string(),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &redact_uri(&self.uri))
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
