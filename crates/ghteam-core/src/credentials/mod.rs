//! Credential issuing and resolution for organization-scoped calls.

pub mod provider;
pub mod resolver;

use std::fmt;

use async_trait::async_trait;

pub use provider::IntegrationCredentialsProvider;
pub use resolver::{CredentialRequest, ResolvedCredential, resolve_credential};

/// Credentials issued for a URL. `token` is `None` when the issuer has
/// nothing for that URL.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
}

impl Credentials {
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn none() -> Self {
        Self { token: None }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Issues credentials for a GitHub URL.
///
/// The URL may name an organization (`https://github.com/acme`) rather than
/// a repository; implementations must accept both.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn get_credentials(&self, url: &str) -> anyhow::Result<Credentials>;
}
