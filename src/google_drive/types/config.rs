use std::{
    env,
    path::Path,
    time::{Duration, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable that, when set, takes precedence over the config file.
pub const ACCESS_TOKEN_ENV: &str = "GDRIVE_ACCESS_TOKEN";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub api_base_uri: Option<String>,
}

impl Config {
    pub fn from_token(access_token: String) -> Self {
        Self {
            access_token,
            expires_at: None,
            api_base_uri: None,
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read config file `{}`", path.display()))?;

        serde_json::from_str::<Config>(config.as_str())
            .with_context(|| format!("Invalid config file `{}`", path.display()))
    }

    /// Token from [`ACCESS_TOKEN_ENV`] if set, otherwise the config file.
    pub async fn from_env_or_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_token_or_file(env::var(ACCESS_TOKEN_ENV).ok(), path).await
    }

    /// `token` wins unless it is missing or empty.
    async fn from_token_or_file(token: Option<String>, path: impl AsRef<Path>) -> Result<Self> {
        match token {
            Some(token) if !token.is_empty() => Ok(Self::from_token(token)),
            _ => Self::load(path).await,
        }
    }

    /// `false` once `expires_at` has passed. Tokens without an expiry are
    /// assumed valid.
    pub fn is_valid(&self) -> Result<bool> {
        let Some(expires_at) = self.expires_at else {
            return Ok(true);
        };

        let now = UNIX_EPOCH
            .elapsed()
            .with_context(|| "Time went backwards!")?;

        Ok(now < Duration::from_secs(expires_at))
    }
}
