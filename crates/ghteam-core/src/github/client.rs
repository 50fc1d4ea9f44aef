//! reqwest-backed implementation of [`TeamsApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use url::Url;

use super::TeamsApi;
use super::error::ApiError;
use super::models::{ErrorBody, MembershipBody, NewTeam, TeamRecord};
use crate::types::TeamRole;

/// Per-request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Media type enabling the team-membership preview.
pub const TEAMS_PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.hellcat-preview+json";

const USER_AGENT: &str = concat!("ghteam/", env!("CARGO_PKG_VERSION"));

/// GitHub API client bound to one token and one API base.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(token: &str, api_base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(api_base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(api_base_url.to_string()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::InvalidHeader("authorization".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(TEAMS_PREVIEW_MEDIA_TYPE));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Append path segments to the API base, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B: serde::Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<Response, ApiError> {
        tracing::debug!(%method, %url, "GitHub API request");
        let response = self.http.request(method, url).json(body).send().await?;
        check_status(response).await
    }
}

/// Turn a non-2xx response into [`ApiError::Status`] carrying GitHub's message.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        });

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl TeamsApi for GitHubClient {
    async fn create_team(&self, org: &str, team: &NewTeam) -> Result<TeamRecord, ApiError> {
        let url = self.endpoint(&["orgs", org, "teams"])?;
        let response = self.send(Method::POST, url, team).await?;
        response
            .json::<TeamRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn add_or_update_membership(
        &self,
        org: &str,
        team_slug: &str,
        username: &str,
        role: TeamRole,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["orgs", org, "teams", team_slug, "memberships", username])?;
        self.send(Method::PUT, url, &MembershipBody { role }).await?;
        Ok(())
    }
}
