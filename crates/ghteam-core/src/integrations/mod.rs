//! Integration registry for GitHub hosts.
//!
//! The registry answers one question: given a host name, which API base and
//! static token should be used. It always knows about github.com, even when
//! nothing is configured.

use crate::config::{DEFAULT_GITHUB_HOST, GhteamConfig, GitHubIntegrationConfig};

/// Registry of configured GitHub integrations, keyed by host.
#[derive(Debug, Clone)]
pub struct IntegrationRegistry {
    github: Vec<GitHubIntegrationConfig>,
}

impl Default for IntegrationRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl IntegrationRegistry {
    /// Create a registry from explicit entries, adding the implicit
    /// github.com entry when none is configured.
    pub fn new(mut github: Vec<GitHubIntegrationConfig>) -> Self {
        if !github
            .iter()
            .any(|entry| entry.host.eq_ignore_ascii_case(DEFAULT_GITHUB_HOST))
        {
            github.push(GitHubIntegrationConfig::new(DEFAULT_GITHUB_HOST));
        }
        Self { github }
    }

    /// Create a registry with no implicit entry.
    pub fn empty() -> Self {
        Self { github: Vec::new() }
    }

    pub fn from_config(config: &GhteamConfig) -> Self {
        Self::new(config.integrations.github.clone())
    }

    pub fn all(&self) -> &[GitHubIntegrationConfig] {
        &self.github
    }

    /// Look up the integration for a host (case-insensitive).
    pub fn by_host(&self, host: &str) -> Option<&GitHubIntegrationConfig> {
        self.github
            .iter()
            .find(|entry| entry.host.eq_ignore_ascii_case(host))
    }
}
