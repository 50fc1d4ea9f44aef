//! Action-level error taxonomy.
//!
//! Every variant aborts the invocation. Per-member failures are never
//! represented here; they are captured as data in the action result.

use thiserror::Error;

/// Category an [`ActionError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input missing or invalid. Raised before any network activity.
    Validation,
    /// Deployment configuration lacks what the invocation needs.
    Configuration,
    /// Credential resolution failed.
    Authentication,
    /// The remote create-team call failed.
    TeamCreation,
}

#[derive(Debug, Error)]
pub enum ActionError {
    /// A required input field was absent or blank.
    #[error("{label} is required but was not provided")]
    MissingField {
        /// Input field name, as the caller spells it.
        field: &'static str,
        /// Human-readable name used in the message.
        label: &'static str,
    },

    #[error("No organization provided for host {host}")]
    MissingOwner { host: String },

    #[error(
        "No matching integration configuration for host {host}, please check your integrations config"
    )]
    IntegrationNotFound { host: String },

    #[error("No token available for host: {host}, with organization {organization}")]
    NoTokenAvailable { host: String, organization: String },

    #[error("Failed to authenticate with GitHub for organization '{organization}': {message}")]
    CredentialProviderFailure {
        organization: String,
        message: String,
    },

    #[error("GitHub team creation failed: {message}")]
    TeamCreation { message: String },

    /// The API client could not be constructed from the resolved credential.
    #[error("Failed to set up GitHub client for {api_base_url}: {message}")]
    ClientSetup {
        api_base_url: String,
        message: String,
    },
}

impl ActionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::MissingField { .. } | ActionError::MissingOwner { .. } => {
                ErrorKind::Validation
            }
            ActionError::IntegrationNotFound { .. } | ActionError::ClientSetup { .. } => {
                ErrorKind::Configuration
            }
            ActionError::NoTokenAvailable { .. }
            | ActionError::CredentialProviderFailure { .. } => ErrorKind::Authentication,
            ActionError::TeamCreation { .. } => ErrorKind::TeamCreation,
        }
    }

    pub(crate) fn missing_organization() -> Self {
        ActionError::MissingField {
            field: "organization",
            label: "Organization name",
        }
    }

    pub(crate) fn missing_team_name() -> Self {
        ActionError::MissingField {
            field: "teamName",
            label: "Team name",
        }
    }
}
