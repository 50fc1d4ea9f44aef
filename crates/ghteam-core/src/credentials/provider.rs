//! Credentials provider backed by the integration registry.

use async_trait::async_trait;
use url::{Position, Url};

use super::{Credentials, CredentialsProvider};
use crate::integrations::IntegrationRegistry;

/// Hands out the static token configured for the URL's host.
#[derive(Debug, Clone)]
pub struct IntegrationCredentialsProvider {
    integrations: IntegrationRegistry,
}

impl IntegrationCredentialsProvider {
    pub fn new(integrations: IntegrationRegistry) -> Self {
        Self { integrations }
    }
}

#[async_trait]
impl CredentialsProvider for IntegrationCredentialsProvider {
    async fn get_credentials(&self, url: &str) -> anyhow::Result<Credentials> {
        let parsed = Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", url, e))?;
        if parsed.host_str().is_none() {
            anyhow::bail!("URL '{}' has no host", url);
        }
        // Integrations may be keyed by host:port
        let host = &parsed[Position::BeforeHost..Position::AfterPort];

        let integration = self.integrations.by_host(host).ok_or_else(|| {
            anyhow::anyhow!(
                "There is no GitHub integration that matches {}. Please add a configuration for an integration.",
                url
            )
        })?;

        Ok(Credentials {
            token: integration.token(),
        })
    }
}
