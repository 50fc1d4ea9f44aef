//! ghteam Core Library
//!
//! Implements the `github:team:create` action: create a team in a GitHub
//! organization, then add members to it with per-member success reporting.

pub mod action;
pub mod config;
pub mod credentials;
pub mod error;
pub mod github;
pub mod integrations;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Action
    pub use crate::action::{
        ACTION_ID, ActionOutput, ActionResult, AddedMember, CreateTeamAction, CreateTeamInput,
        FailedMember, MemberSpec, RecordedOutput,
    };

    // Configuration
    pub use crate::config::{ConfigStore, GhteamConfig, GitHubIntegrationConfig};
    pub use crate::integrations::IntegrationRegistry;

    // Credentials
    pub use crate::credentials::{
        Credentials, CredentialsProvider, IntegrationCredentialsProvider, ResolvedCredential,
    };

    // GitHub
    pub use crate::github::{ApiError, ClientFactory, GitHubClient, HttpClientFactory, TeamsApi};

    // Errors and shared types
    pub use crate::error::{ActionError, ErrorKind};
    pub use crate::types::{TeamPrivacy, TeamRole};
}
