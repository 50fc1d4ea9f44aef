//! Two-branch credential resolution.
//!
//! 1. An explicit token from the caller is used as-is; no issuer is asked.
//! 2. Otherwise an issuer is asked for a token scoped to `host/organization`.
//!
//! Branch 2 asks for `https://{host}/{organization}`, never a repository
//! URL. Team operations have no repository context.

use std::fmt;

use super::CredentialsProvider;
use crate::error::ActionError;
use crate::integrations::IntegrationRegistry;

/// Bearer token plus the API base it is valid for. Lives for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub bearer_token: String,
    pub api_base_url: String,
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("bearer_token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

pub struct CredentialRequest<'a> {
    pub host: &'a str,
    pub organization: &'a str,
    pub explicit_token: Option<&'a str>,
    pub integrations: &'a IntegrationRegistry,
    pub credentials_provider: Option<&'a dyn CredentialsProvider>,
}

/// Organization-scoped URL handed to the credentials provider.
pub fn organization_url(host: &str, organization: &str) -> String {
    format!("https://{}/{}", host, organization)
}

pub async fn resolve_credential(
    request: CredentialRequest<'_>,
) -> Result<ResolvedCredential, ActionError> {
    let CredentialRequest {
        host,
        organization,
        explicit_token,
        integrations,
        credentials_provider,
    } = request;

    let integration =
        integrations
            .by_host(host)
            .ok_or_else(|| ActionError::IntegrationNotFound {
                host: host.to_string(),
            })?;
    let api_base_url = integration.api_base_url();

    if let Some(token) = explicit_token.filter(|t| !t.trim().is_empty()) {
        tracing::debug!(host, "Using explicitly provided token");
        return Ok(ResolvedCredential {
            bearer_token: token.to_string(),
            api_base_url,
        });
    }

    if organization.trim().is_empty() {
        return Err(ActionError::MissingOwner {
            host: host.to_string(),
        });
    }

    let no_token = || ActionError::NoTokenAvailable {
        host: host.to_string(),
        organization: organization.to_string(),
    };

    let Some(provider) = credentials_provider else {
        return Err(no_token());
    };

    let url = organization_url(host, organization);
    tracing::debug!(%url, "Requesting organization-scoped credentials");

    let credentials = provider.get_credentials(&url).await.map_err(|e| {
        ActionError::CredentialProviderFailure {
            organization: organization.to_string(),
            message: e.to_string(),
        }
    })?;

    let token = credentials
        .token
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(no_token)?;

    Ok(ResolvedCredential {
        bearer_token: token,
        api_base_url,
    })
}
