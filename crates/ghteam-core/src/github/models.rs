//! Request and response bodies for the GitHub teams endpoints.

use serde::{Deserialize, Serialize};

use crate::types::{TeamPrivacy, TeamRole};

/// Body of `POST /orgs/{org}/teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub privacy: TeamPrivacy,
}

/// Team as returned by the create call. Only the fields read here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamRecord {
    pub id: u64,
    pub slug: String,
    pub html_url: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /orgs/{org}/teams/{team_slug}/memberships/{username}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct MembershipBody {
    pub role: TeamRole,
}

/// Error payload GitHub attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
