//! Builds the API client for a resolved credential.

use std::sync::Arc;

use super::{GitHubClient, TeamsApi};
use crate::credentials::ResolvedCredential;
use crate::error::ActionError;

/// Produces one [`TeamsApi`] per invocation.
pub trait ClientFactory: Send + Sync {
    fn create(&self, credential: &ResolvedCredential) -> Result<Arc<dyn TeamsApi>, ActionError>;
}

/// Builds a [`GitHubClient`] talking to the credential's API base.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClientFactory;

impl ClientFactory for HttpClientFactory {
    fn create(&self, credential: &ResolvedCredential) -> Result<Arc<dyn TeamsApi>, ActionError> {
        let client = GitHubClient::new(&credential.bearer_token, &credential.api_base_url)
            .map_err(|e| ActionError::ClientSetup {
                api_base_url: credential.api_base_url.clone(),
                message: e.to_string(),
            })?;
        Ok(Arc::new(client))
    }
}
