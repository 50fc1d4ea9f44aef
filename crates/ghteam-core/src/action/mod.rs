//! The `github:team:create` action.
//!
//! One invocation runs a fixed pipeline: validate input, resolve a
//! credential, build a client, create the team, grant memberships, report.
//! Team creation is all-or-nothing. Membership grants are best-effort per
//! member and never fail the invocation.

pub mod input;
pub mod members;
pub mod output;

use std::sync::Arc;

use tracing::{error, info};

use crate::credentials::{
    CredentialRequest, CredentialsProvider, IntegrationCredentialsProvider, resolve_credential,
};
use crate::error::ActionError;
use crate::github::{ClientFactory, HttpClientFactory, NewTeam};
use crate::integrations::IntegrationRegistry;

pub use input::{CreateTeamInput, MemberSpec, ValidatedInput};
pub use members::provision_members;
pub use output::{
    ActionOutput, ActionResult, AddedMember, FailedMember, MemberOutcome, RecordedOutput,
    partition_outcomes,
};

/// Identifier the action is registered under.
pub const ACTION_ID: &str = "github:team:create";

pub struct CreateTeamAction {
    integrations: IntegrationRegistry,
    credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    client_factory: Arc<dyn ClientFactory>,
}

impl CreateTeamAction {
    /// Create the action with explicit collaborators.
    pub fn new(
        integrations: IntegrationRegistry,
        credentials_provider: Option<Arc<dyn CredentialsProvider>>,
        client_factory: Arc<dyn ClientFactory>,
    ) -> Self {
        Self {
            integrations,
            credentials_provider,
            client_factory,
        }
    }

    /// Create the action with the integration-backed credentials provider
    /// and the HTTP client.
    pub fn with_integrations(integrations: IntegrationRegistry) -> Self {
        let provider = IntegrationCredentialsProvider::new(integrations.clone());
        Self::new(
            integrations,
            Some(Arc::new(provider)),
            Arc::new(HttpClientFactory),
        )
    }

    pub fn id(&self) -> &'static str {
        ACTION_ID
    }

    /// Run the action and hand its outputs to `out`.
    pub async fn handler(
        &self,
        input: &CreateTeamInput,
        out: &mut dyn ActionOutput,
    ) -> Result<ActionResult, ActionError> {
        let result = self.execute(input).await?;
        result.emit(out);
        Ok(result)
    }

    /// Run the action and return its result without emitting it.
    pub async fn execute(&self, input: &CreateTeamInput) -> Result<ActionResult, ActionError> {
        let input = input.validate()?;
        let organization = input.organization();

        let credential = resolve_credential(CredentialRequest {
            host: input.host(),
            organization,
            explicit_token: input.token(),
            integrations: &self.integrations,
            credentials_provider: self.credentials_provider.as_deref(),
        })
        .await
        .inspect_err(|err| {
            error!(organization, error = %err, "Failed to resolve GitHub credentials")
        })?;

        let api = self
            .client_factory
            .create(&credential)
            .inspect_err(|err| {
                error!(organization, error = %err, "Failed to build GitHub client")
            })?;

        info!(
            organization,
            team = input.team_name(),
            privacy = %input.privacy(),
            "Creating GitHub team"
        );

        let new_team = NewTeam {
            name: input.team_name().to_string(),
            description: input.description().map(str::to_string),
            privacy: input.privacy(),
        };
        let team = api
            .create_team(organization, &new_team)
            .await
            .map_err(|err| ActionError::TeamCreation {
                message: err.to_string(),
            })
            .inspect_err(|err| error!(organization, error = %err, "Team creation failed"))?;

        info!(
            team_id = team.id,
            slug = %team.slug,
            url = %team.html_url,
            "Created GitHub team"
        );

        let members = input.members();
        if !members.is_empty() {
            info!(count = members.len(), slug = %team.slug, "Adding team members");
        }
        let outcomes = provision_members(api.as_ref(), organization, &team.slug, members).await;
        let (members_added, members_failed) = partition_outcomes(outcomes);

        info!(
            slug = %team.slug,
            added = members_added.len(),
            failed = members_failed.len(),
            "Team creation completed"
        );

        Ok(ActionResult {
            team_id: team.id,
            team_url: team.html_url,
            team_slug: team.slug,
            members_added,
            members_failed,
        })
    }
}
