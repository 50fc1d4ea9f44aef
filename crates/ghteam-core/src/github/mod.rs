//! GitHub REST access for team management.
//!
//! Only the two endpoints the action needs are modelled: team creation and
//! membership grants. Both sit behind [`TeamsApi`] so the action can be
//! driven against a fake in tests.

pub mod client;
pub mod error;
pub mod factory;
pub mod models;

use async_trait::async_trait;

pub use client::GitHubClient;
pub use error::ApiError;
pub use factory::{ClientFactory, HttpClientFactory};
pub use models::{NewTeam, TeamRecord};

use crate::types::TeamRole;

/// Team operations on a GitHub organization.
#[async_trait]
pub trait TeamsApi: Send + Sync {
    /// Create a team in the organization.
    async fn create_team(&self, org: &str, team: &NewTeam) -> Result<TeamRecord, ApiError>;

    /// Add a user to a team, or change their role if already a member.
    async fn add_or_update_membership(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<(), ApiError>;
}
