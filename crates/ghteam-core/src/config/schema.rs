//! Configuration schema for ghteam.toml
//!
//! ```toml
//! [[integrations.github]]
//! host = "ghe.example.com"
//! api_base_url = "https://ghe.example.com/api/v3"
//! token_env = "GHE_TOKEN"
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Host served by the implicit integration.
pub const DEFAULT_GITHUB_HOST: &str = "github.com";

/// API base of the public GitHub host.
pub const DEFAULT_GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Root configuration structure for ghteam.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhteamConfig {
    #[serde(default)]
    pub integrations: IntegrationsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrationsConfig {
    /// GitHub and GitHub Enterprise hosts
    #[serde(default)]
    pub github: Vec<GitHubIntegrationConfig>,
}

/// Integration entry for a single GitHub host
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubIntegrationConfig {
    /// Host name, e.g. "github.com" or "ghe.example.com"
    pub host: String,

    /// REST API base. Derived from the host when omitted.
    #[serde(default)]
    pub api_base_url: Option<Url>,

    /// Static token for this host
    #[serde(default)]
    pub token: Option<String>,

    /// Environment variable holding the token, read at lookup time
    #[serde(default)]
    pub token_env: Option<String>,
}

impl fmt::Debug for GitHubIntegrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubIntegrationConfig")
            .field("host", &self.host)
            .field("api_base_url", &self.api_base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("token_env", &self.token_env)
            .finish()
    }
}

impl GitHubIntegrationConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_base_url: None,
            token: None,
            token_env: None,
        }
    }

    pub fn with_api_base_url(mut self, url: Url) -> Self {
        self.api_base_url = Some(url);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_token_env(mut self, var: impl Into<String>) -> Self {
        self.token_env = Some(var.into());
        self
    }

    /// Effective REST API base, without a trailing slash.
    ///
    /// github.com maps to api.github.com; any other host is assumed to be
    /// GitHub Enterprise Server and maps to `https://{host}/api/v3`.
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None if self.host.eq_ignore_ascii_case(DEFAULT_GITHUB_HOST) => {
                DEFAULT_GITHUB_API_BASE_URL.to_string()
            }
            None => format!("https://{}/api/v3", self.host),
        }
    }

    /// Static token for this host. `token` wins over `token_env`.
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            return Some(token.to_string());
        }
        self.token_env
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("GitHub integration requires a non-empty 'host' field");
        }
        if self.host.contains('/') || self.host.contains("://") {
            anyhow::bail!(
                "GitHub integration host must be a bare host name, got '{}'",
                self.host
            );
        }
        if let Some(url) = &self.api_base_url
            && !matches!(url.scheme(), "http" | "https")
        {
            anyhow::bail!(
                "GitHub integration '{}' api_base_url must be http(s), got '{}'",
                self.host,
                url
            );
        }
        Ok(())
    }
}

impl GhteamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.integrations.github {
            entry.validate()?;
            if !seen.insert(entry.host.to_ascii_lowercase()) {
                anyhow::bail!("Duplicate GitHub integration for host '{}'", entry.host);
            }
        }
        Ok(())
    }
}
