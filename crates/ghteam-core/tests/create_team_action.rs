//! End-to-end tests for the `github:team:create` pipeline against fakes.

mod support;

use std::sync::Arc;

use serde_json::json;

use ghteam_core::action::{
    CreateTeamAction, CreateTeamInput, MemberSpec, RecordedOutput, partition_outcomes,
    provision_members,
};
use ghteam_core::config::GitHubIntegrationConfig;
use ghteam_core::credentials::{CredentialsProvider, IntegrationCredentialsProvider};
use ghteam_core::error::{ActionError, ErrorKind};
use ghteam_core::github::NewTeam;
use ghteam_core::integrations::IntegrationRegistry;
use ghteam_core::types::{TeamPrivacy, TeamRole};

use support::{
    Call, CountingProvider, FailingClientFactory, FakeClientFactory, FakeTeamsApi, test_team,
};

struct Harness {
    api: Arc<FakeTeamsApi>,
    factory: Arc<FakeClientFactory>,
    provider: Arc<CountingProvider>,
    action: CreateTeamAction,
}

fn harness_with(api: FakeTeamsApi, provider: CountingProvider) -> Harness {
    let api = Arc::new(api);
    let factory = Arc::new(FakeClientFactory::new(api.clone()));
    let provider = Arc::new(provider);
    let provider_dyn: Arc<dyn CredentialsProvider> = provider.clone();
    let action = CreateTeamAction::new(
        IntegrationRegistry::default(),
        Some(provider_dyn),
        factory.clone(),
    );
    Harness {
        api,
        factory,
        provider,
        action,
    }
}

fn harness(api: FakeTeamsApi) -> Harness {
    harness_with(api, CountingProvider::with_token("ghs_installation"))
}

#[tokio::test]
async fn creates_team_with_no_members() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input = CreateTeamInput::new("test-org", "test-team")
        .with_description("Test team")
        .with_privacy(TeamPrivacy::Closed);

    let mut out = RecordedOutput::new();
    let result = h.action.handler(&input, &mut out).await.unwrap();

    assert_eq!(result.team_id, 12345);
    assert_eq!(
        result.team_url,
        "https://github.com/orgs/test-org/teams/test-team"
    );
    assert_eq!(result.team_slug, "test-team");
    assert!(result.members_added.is_empty());
    assert!(result.members_failed.is_empty());

    assert_eq!(
        out.names(),
        vec!["teamId", "teamUrl", "teamSlug", "membersAdded", "membersFailed"]
    );
    assert_eq!(out.get("teamId"), Some(&json!(12345)));
    assert_eq!(out.get("membersAdded"), Some(&json!([])));
    assert_eq!(out.get("membersFailed"), Some(&json!([])));

    assert_eq!(
        h.api.calls(),
        vec![Call::CreateTeam {
            org: "test-org".to_string(),
            team: NewTeam {
                name: "test-team".to_string(),
                description: Some("Test team".to_string()),
                privacy: TeamPrivacy::Closed,
            },
        }]
    );
}

#[tokio::test]
async fn missing_organization_fails_before_any_call() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input = CreateTeamInput {
        team_name: Some("test-team".to_string()),
        ..CreateTeamInput::default()
    };

    let err = h.action.execute(&input).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Organization name is required but was not provided"
    );
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(h.api.calls().is_empty());
    assert!(h.provider.urls().is_empty());
    assert!(h.factory.credentials().is_empty());
}

#[tokio::test]
async fn partial_member_failure_still_succeeds() {
    let h = harness(FakeTeamsApi::new(test_team()).failing_user("invaliduser", "User not found"));
    let input = CreateTeamInput::new("test-org", "test-team")
        .with_member(MemberSpec::new("validuser").with_role(TeamRole::Member))
        .with_member(MemberSpec::new("invaliduser").with_role(TeamRole::Maintainer));

    let mut out = RecordedOutput::new();
    h.action.handler(&input, &mut out).await.unwrap();

    assert_eq!(
        out.get("membersAdded"),
        Some(&json!([{"username": "validuser", "role": "member"}]))
    );
    assert_eq!(
        out.get("membersFailed"),
        Some(&json!([{"username": "invaliduser", "role": "maintainer", "error": "User not found"}]))
    );
}

#[tokio::test]
async fn every_member_lands_in_exactly_one_list_in_order() {
    let h = harness(
        FakeTeamsApi::new(test_team())
            .failing_user("bob", "User not found")
            .failing_user("dave", "Validation Failed"),
    );
    let usernames = ["alice", "bob", "carol", "dave", "erin"];
    let mut input = CreateTeamInput::new("test-org", "test-team");
    for name in usernames {
        input = input.with_member(MemberSpec::new(name));
    }

    let result = h.action.execute(&input).await.unwrap();

    assert_eq!(
        result.members_added.len() + result.members_failed.len(),
        usernames.len()
    );
    let added: Vec<_> = result
        .members_added
        .iter()
        .map(|m| m.username.as_str())
        .collect();
    let failed: Vec<_> = result
        .members_failed
        .iter()
        .map(|m| m.username.as_str())
        .collect();
    assert_eq!(added, vec!["alice", "carol", "erin"]);
    assert_eq!(failed, vec!["bob", "dave"]);
    assert_eq!(result.members_failed[1].error, "Validation Failed");

    let called: Vec<_> = h
        .api
        .membership_calls()
        .into_iter()
        .filter_map(|c| match c {
            Call::Membership { username, .. } => Some(username),
            Call::CreateTeam { .. } => None,
        })
        .collect();
    assert_eq!(called, usernames);
}

#[tokio::test]
async fn member_without_role_defaults_to_member() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input =
        CreateTeamInput::new("test-org", "test-team").with_member(MemberSpec::new("norole"));

    let result = h.action.execute(&input).await.unwrap();

    assert_eq!(result.members_added[0].role, TeamRole::Member);
    assert_eq!(
        h.api.membership_calls(),
        vec![Call::Membership {
            org: "test-org".to_string(),
            team_slug: "test-team".to_string(),
            username: "norole".to_string(),
            role: TeamRole::Member,
        }]
    );
}

#[tokio::test]
async fn membership_uses_slug_returned_by_github() {
    let mut team = test_team();
    team.slug = "platform-engineering".to_string();
    let h = harness(FakeTeamsApi::new(team));
    let input = CreateTeamInput::new("test-org", "Platform Engineering")
        .with_member(MemberSpec::new("alice"));

    let result = h.action.execute(&input).await.unwrap();

    assert_eq!(result.team_slug, "platform-engineering");
    assert!(matches!(
        &h.api.membership_calls()[0],
        Call::Membership { team_slug, .. } if team_slug == "platform-engineering"
    ));
}

#[tokio::test]
async fn team_creation_failure_aborts_before_memberships() {
    let h = harness(
        FakeTeamsApi::new(test_team()).failing_create("Name must be unique for this org"),
    );
    let input =
        CreateTeamInput::new("test-org", "test-team").with_member(MemberSpec::new("alice"));

    let err = h.action.execute(&input).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "GitHub team creation failed: Name must be unique for this org"
    );
    assert_eq!(err.kind(), ErrorKind::TeamCreation);
    assert!(h.api.membership_calls().is_empty());
}

#[tokio::test]
async fn failed_invocation_emits_nothing() {
    let h = harness(FakeTeamsApi::new(test_team()).failing_create("Validation Failed"));
    let input = CreateTeamInput::new("test-org", "test-team");

    let mut out = RecordedOutput::new();
    assert!(h.action.handler(&input, &mut out).await.is_err());
    assert!(out.entries().is_empty());
}

#[tokio::test]
async fn explicit_token_never_calls_provider() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input = CreateTeamInput::new("test-org", "test-team").with_token("ghp_explicit");

    h.action.execute(&input).await.unwrap();

    assert!(h.provider.urls().is_empty());
    let credentials = h.factory.credentials();
    assert_eq!(credentials.len(), 1);
    assert_eq!(credentials[0].bearer_token, "ghp_explicit");
    assert_eq!(credentials[0].api_base_url, "https://api.github.com");
}

#[tokio::test]
async fn issued_credential_is_scoped_to_organization() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input = CreateTeamInput::new("test-org", "test-team");

    h.action.execute(&input).await.unwrap();

    assert_eq!(h.provider.urls(), vec!["https://github.com/test-org".to_string()]);
    assert_eq!(h.factory.credentials()[0].bearer_token, "ghs_installation");
}

#[tokio::test]
async fn provider_failure_is_wrapped_with_organization() {
    let h = harness_with(
        FakeTeamsApi::new(test_team()),
        CountingProvider::failing("No installation found for test-org"),
    );
    let input = CreateTeamInput::new("test-org", "test-team");

    let err = h.action.execute(&input).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to authenticate with GitHub for organization 'test-org': No installation found for test-org"
    );
    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(h.api.calls().is_empty());
}

#[tokio::test]
async fn unknown_host_is_configuration_error() {
    let h = harness(FakeTeamsApi::new(test_team()));
    let input = CreateTeamInput::new("test-org", "test-team").with_host("ghe.example.com");

    let err = h.action.execute(&input).await.unwrap_err();

    assert!(matches!(err, ActionError::IntegrationNotFound { ref host } if host == "ghe.example.com"));
    assert!(h.provider.urls().is_empty());
}

#[tokio::test]
async fn enterprise_host_resolves_its_api_base() {
    let api = Arc::new(FakeTeamsApi::new(test_team()));
    let factory = Arc::new(FakeClientFactory::new(api.clone()));
    let provider: Arc<dyn CredentialsProvider> =
        Arc::new(CountingProvider::with_token("ghs_enterprise"));
    let action = CreateTeamAction::new(
        IntegrationRegistry::new(vec![GitHubIntegrationConfig::new("ghe.example.com")]),
        Some(provider),
        factory.clone(),
    );
    let input = CreateTeamInput::new("acme", "core").with_host("ghe.example.com");

    action.execute(&input).await.unwrap();

    assert_eq!(
        factory.credentials()[0].api_base_url,
        "https://ghe.example.com/api/v3"
    );
}

#[tokio::test]
async fn host_with_port_resolves_configured_token() {
    let api = Arc::new(FakeTeamsApi::new(test_team()));
    let factory = Arc::new(FakeClientFactory::new(api.clone()));
    let registry = IntegrationRegistry::new(vec![
        GitHubIntegrationConfig::new("ghe.example.com:8443").with_token("ghp_port"),
    ]);
    let provider: Arc<dyn CredentialsProvider> =
        Arc::new(IntegrationCredentialsProvider::new(registry.clone()));
    let action = CreateTeamAction::new(registry, Some(provider), factory.clone());
    let input = CreateTeamInput::new("acme", "core").with_host("ghe.example.com:8443");

    action.execute(&input).await.unwrap();

    let credentials = factory.credentials();
    assert_eq!(credentials[0].bearer_token, "ghp_port");
    assert_eq!(
        credentials[0].api_base_url,
        "https://ghe.example.com:8443/api/v3"
    );
}

#[tokio::test]
async fn blank_failure_message_is_reported_as_unknown_error() {
    let api = FakeTeamsApi::new(test_team()).failing_user("ghost", "");
    let members = [MemberSpec::new("ghost").with_role(TeamRole::Maintainer)];

    let outcomes = provision_members(&api, "test-org", "test-team", &members).await;
    let (added, failed) = partition_outcomes(outcomes);

    assert!(added.is_empty());
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].username, "ghost");
    assert_eq!(failed[0].role, TeamRole::Maintainer);
    assert_eq!(failed[0].error, "Unknown error");
}

#[tokio::test]
async fn client_setup_failure_is_configuration_error() {
    let provider: Arc<dyn CredentialsProvider> =
        Arc::new(CountingProvider::with_token("ghs_installation"));
    let action = CreateTeamAction::new(
        IntegrationRegistry::default(),
        Some(provider),
        Arc::new(FailingClientFactory),
    );
    let input =
        CreateTeamInput::new("test-org", "test-team").with_member(MemberSpec::new("alice"));

    let mut out = RecordedOutput::new();
    let err = action.handler(&input, &mut out).await.unwrap_err();

    assert!(matches!(err, ActionError::ClientSetup { .. }));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(out.entries().is_empty());
}

#[tokio::test]
async fn provision_members_with_empty_list_makes_no_calls() {
    let api = FakeTeamsApi::new(test_team());

    let outcomes = provision_members(&api, "test-org", "test-team", &[]).await;

    assert!(outcomes.is_empty());
    assert!(api.calls().is_empty());
}

#[test]
fn action_id_is_stable() {
    let action = CreateTeamAction::with_integrations(IntegrationRegistry::default());
    assert_eq!(action.id(), "github:team:create");
}
