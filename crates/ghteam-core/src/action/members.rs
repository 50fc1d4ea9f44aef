//! Best-effort membership provisioning.

use tracing::{info, warn};

use super::input::MemberSpec;
use super::output::{AddedMember, FailedMember, MemberOutcome, UNKNOWN_ERROR};
use crate::github::TeamsApi;

/// Grant each member their role on the team, one call at a time.
///
/// Returns exactly one outcome per input member, in input order. A failed
/// grant is recorded and the loop moves on; nothing here returns an error.
pub async fn provision_members(
    api: &dyn TeamsApi,
    organization: &str,
    team_slug: &str,
    members: &[MemberSpec],
) -> Vec<MemberOutcome> {
    let mut outcomes = Vec::with_capacity(members.len());

    for member in members {
        let role = member.resolved_role();
        let outcome = match api
            .add_or_update_membership(organization, team_slug, &member.username, role)
            .await
        {
            Ok(()) => {
                info!(username = %member.username, %role, team = team_slug, "Added team member");
                MemberOutcome::Added(AddedMember {
                    username: member.username.clone(),
                    role,
                })
            }
            Err(err) => {
                let message = err.to_string();
                let error = if message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                };
                warn!(
                    username = %member.username,
                    %role,
                    team = team_slug,
                    error = %error,
                    "Failed to add team member"
                );
                MemberOutcome::Failed(FailedMember {
                    username: member.username.clone(),
                    role,
                    error,
                })
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}
