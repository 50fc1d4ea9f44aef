//! Test doubles for the action's collaborators.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ghteam_core::credentials::{Credentials, CredentialsProvider, ResolvedCredential};
use ghteam_core::error::ActionError;
use ghteam_core::github::{ApiError, ClientFactory, NewTeam, TeamRecord, TeamsApi};
use ghteam_core::types::TeamRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateTeam {
        org: String,
        team: NewTeam,
    },
    Membership {
        org: String,
        team_slug: String,
        username: String,
        role: TeamRole,
    },
}

/// In-memory GitHub that records every call.
pub struct FakeTeamsApi {
    team: TeamRecord,
    create_error: Option<String>,
    failing_users: HashMap<String, String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTeamsApi {
    pub fn new(team: TeamRecord) -> Self {
        Self {
            team,
            create_error: None,
            failing_users: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub fn failing_user(mut self, username: &str, message: &str) -> Self {
        self.failing_users
            .insert(username.to_string(), message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn membership_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Membership { .. }))
            .collect()
    }
}

#[async_trait]
impl TeamsApi for FakeTeamsApi {
    async fn create_team(&self, org: &str, team: &NewTeam) -> Result<TeamRecord, ApiError> {
        self.calls.lock().unwrap().push(Call::CreateTeam {
            org: org.to_string(),
            team: team.clone(),
        });
        match &self.create_error {
            Some(message) => Err(ApiError::Status {
                status: 422,
                message: message.clone(),
            }),
            None => Ok(self.team.clone()),
        }
    }

    async fn add_or_update_membership(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(Call::Membership {
            org: org.to_string(),
            team_slug: team_slug.to_string(),
            username: username.to_string(),
            role,
        });
        match self.failing_users.get(username) {
            Some(message) => Err(ApiError::Status {
                status: 404,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Hands out the same fake for every invocation and remembers credentials.
pub struct FakeClientFactory {
    api: Arc<FakeTeamsApi>,
    credentials: Mutex<Vec<ResolvedCredential>>,
}

impl FakeClientFactory {
    pub fn new(api: Arc<FakeTeamsApi>) -> Self {
        Self {
            api,
            credentials: Mutex::new(Vec::new()),
        }
    }

    pub fn credentials(&self) -> Vec<ResolvedCredential> {
        self.credentials.lock().unwrap().clone()
    }
}

impl ClientFactory for FakeClientFactory {
    fn create(&self, credential: &ResolvedCredential) -> Result<Arc<dyn TeamsApi>, ActionError> {
        self.credentials.lock().unwrap().push(credential.clone());
        let api: Arc<dyn TeamsApi> = self.api.clone();
        Ok(api)
    }
}

/// Credentials provider that counts calls.
pub struct CountingProvider {
    token: Option<String>,
    error: Option<String>,
    urls: Mutex<Vec<String>>,
}

impl CountingProvider {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            error: None,
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            token: None,
            error: Some(message.to_string()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialsProvider for CountingProvider {
    async fn get_credentials(&self, url: &str) -> anyhow::Result<Credentials> {
        self.urls.lock().unwrap().push(url.to_string());
        if let Some(message) = &self.error {
            anyhow::bail!("{}", message);
        }
        Ok(Credentials {
            token: self.token.clone(),
        })
    }
}

pub fn test_team() -> TeamRecord {
    TeamRecord {
        id: 12345,
        slug: "test-team".to_string(),
        html_url: "https://github.com/orgs/test-org/teams/test-team".to_string(),
        name: "test-team".to_string(),
    }
}

/// Factory that cannot build a client.
pub struct FailingClientFactory;

impl ClientFactory for FailingClientFactory {
    fn create(&self, credential: &ResolvedCredential) -> Result<Arc<dyn TeamsApi>, ActionError> {
        Err(ActionError::ClientSetup {
            api_base_url: credential.api_base_url.clone(),
            message: "relative URL without a base".to_string(),
        })
    }
}
