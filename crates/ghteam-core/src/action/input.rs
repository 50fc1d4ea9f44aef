//! Action input and its validation.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_GITHUB_HOST;
use crate::error::ActionError;
use crate::types::{TeamPrivacy, TeamRole};

/// A user to add to the new team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSpec {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamRole>,
}

impl MemberSpec {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: TeamRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Role to grant; `member` when none was given.
    pub fn resolved_role(&self) -> TeamRole {
        self.role.unwrap_or_default()
    }
}

/// Input of `github:team:create`, in the JSON shape callers send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamInput {
    /// Organization that will own the team
    #[serde(default)]
    pub organization: Option<String>,

    /// Team display name; GitHub derives the slug from it
    #[serde(default)]
    pub team_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Defaults to `closed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<TeamPrivacy>,

    /// Users to add after creation, in order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<MemberSpec>>,

    /// Explicit token; bypasses the credentials provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// GitHub host, defaults to github.com
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl CreateTeamInput {
    pub fn new(organization: impl Into<String>, team_name: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            team_name: Some(team_name.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_privacy(mut self, privacy: TeamPrivacy) -> Self {
        self.privacy = Some(privacy);
        self
    }

    pub fn with_member(mut self, member: MemberSpec) -> Self {
        self.members.get_or_insert_with(Vec::new).push(member);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Check required fields. Runs before any credential or network work.
    pub fn validate(&self) -> Result<ValidatedInput<'_>, ActionError> {
        let organization = non_blank(self.organization.as_deref())
            .ok_or_else(ActionError::missing_organization)?;
        let team_name =
            non_blank(self.team_name.as_deref()).ok_or_else(ActionError::missing_team_name)?;

        Ok(ValidatedInput {
            input: self,
            organization,
            team_name,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Borrowed view over an input that passed [`CreateTeamInput::validate`].
/// Defaults are applied here, at the point of use.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedInput<'a> {
    input: &'a CreateTeamInput,
    organization: &'a str,
    team_name: &'a str,
}

impl<'a> ValidatedInput<'a> {
    pub fn organization(&self) -> &'a str {
        self.organization
    }

    pub fn team_name(&self) -> &'a str {
        self.team_name
    }

    pub fn description(&self) -> Option<&'a str> {
        self.input.description.as_deref()
    }

    pub fn privacy(&self) -> TeamPrivacy {
        self.input.privacy.unwrap_or_default()
    }

    pub fn members(&self) -> &'a [MemberSpec] {
        self.input.members.as_deref().unwrap_or(&[])
    }

    pub fn token(&self) -> Option<&'a str> {
        non_blank(self.input.token.as_deref())
    }

    pub fn host(&self) -> &'a str {
        non_blank(self.input.host.as_deref()).unwrap_or(DEFAULT_GITHUB_HOST)
    }
}
