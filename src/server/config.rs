//! Environment configuration.

use std::path::PathBuf;

use crate::server::error::config::ConfigError;

const DEFAULT_MEDIA_DIR: &str = "./data/media";
const DEFAULT_MEDIA_URL_PREFIX: &str = "/media";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Server settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Valkey/Redis URL for the session store (`VALKEY_URL`)
    pub valkey_url: String,
    /// Directory uploaded files are written to (`MEDIA_DIR`)
    pub media_dir: PathBuf,
    /// Public URL prefix uploaded files are served under (`MEDIA_URL_PREFIX`)
    pub media_url_prefix: String,
    /// Largest accepted request body in bytes (`MAX_UPLOAD_BYTES`)
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "MAX_UPLOAD_BYTES".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let media_url_prefix = lookup("MEDIA_URL_PREFIX")
            .unwrap_or_else(|| DEFAULT_MEDIA_URL_PREFIX.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            media_dir: PathBuf::from(
                lookup("MEDIA_DIR").unwrap_or_else(|| DEFAULT_MEDIA_DIR.to_string()),
            ),
            media_url_prefix,
            max_upload_bytes,
        })
    }
}
