//! Client configuration
//!
//! `RestConfig` is loaded from YAML and may be overridden from the
//! environment:
//!
//! ```yaml
//! base_url: https://discord.com/api/v10
//! token: "MTk4NjIyNDgzNDcxOTI1MjQ4.Cl2FMQ.ZnCjm1XVW7vRze4b7Cq4se7kKWs"
//! timeout_secs: 30
//! page_size: 100
//! headers:
//!   X-Audit-Log-Reason: nightly export
//! ```

use crate::error::{Error, Result};
use crate::http::{RouterConfig, DEFAULT_BASE_URL};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable holding the bot token
pub const TOKEN_ENV: &str = "CORDREST_TOKEN";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "CORDREST_BASE_URL";

/// Settings for a [`RestClient`](crate::RestClient)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// REST API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bot token, sent as `Authorization: Bot <token>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Records per page for list commands
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Extra headers sent with every request
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            page_size: default_page_size(),
            headers: HashMap::new(),
        }
    }
}

impl std::fmt::Debug for RestConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_size", &self.page_size)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl RestConfig {
    /// Override fields from `CORDREST_*` environment variables
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Override fields from any variable lookup
    #[must_use]
    pub fn with_overrides<F: Fn(&str) -> Option<String>>(mut self, lookup: F) -> Self {
        if let Some(token) = lookup(TOKEN_ENV).filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            self.base_url = base_url;
        }
        self
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize {
                size: self.page_size,
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Router settings derived from this config
    pub fn router_config(&self) -> RouterConfig {
        let mut builder = RouterConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }
        if let Some(token) = &self.token {
            builder = builder.authorization(format!("Bot {token}"));
        }

        builder.build()
    }
}

/// Load a config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<RestConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<RestConfig> {
    let config: RestConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
