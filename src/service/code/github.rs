//! Code-host integration for status-bot.
//!
//! This module provides the GitHub implementation of the
//! `GenericCodeHostClient` trait: pull-request metadata, review, comment,
//! and listing reads against the GitHub REST API, authenticated with an
//! access token.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::base::{config::Config, types::RemoteCallFailed};

use super::{CodeHostClient, GenericCodeHostClient, PullRequest, Review, ReviewComment};

// Extra methods on `CodeHostClient` applied by the github implementation.

impl CodeHostClient {
    pub fn github(config: &Config) -> Self {
        let client = GitHubCodeHostClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// GitHub code-host client implementation.
#[derive(Clone)]
pub struct GitHubCodeHostClient {
    client: reqwest::Client,
    config: Config,
}

impl GitHubCodeHostClient {
    /// Create a new GitHub code-host client.
    #[instrument(name = "GitHubCodeHostClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    /// Base URL for the configured repository's pull requests.
    fn pulls_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/pulls",
            self.config.github_api_base, self.config.github_owner, self.config.github_repo
        )
    }

    /// Perform an authenticated GET and deserialize the JSON response.
    ///
    /// Transport failures and non-2xx statuses both surface as
    /// `RemoteCallFailed`. GitHub rejects requests without a `User-Agent`.
    async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, RemoteCallFailed>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, format!("token {}", self.config.github_token))
            .header(header::USER_AGENT, "status-bot")
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenericCodeHostClient for GitHubCodeHostClient {
    #[instrument(name = "GitHubCodeHostClient::get_pull_request", skip(self))]
    async fn get_pull_request(&self, number: &str) -> Result<PullRequest, RemoteCallFailed> {
        let url = format!("{}/{number}", self.pulls_url());

        self.get_json(&url, &[]).await
    }

    #[instrument(name = "GitHubCodeHostClient::list_reviews", skip(self))]
    async fn list_reviews(&self, number: &str) -> Result<Vec<Review>, RemoteCallFailed> {
        let url = format!("{}/{number}/reviews", self.pulls_url());

        self.get_json(&url, &[]).await
    }

    #[instrument(name = "GitHubCodeHostClient::list_review_comments", skip(self))]
    async fn list_review_comments(&self, number: &str) -> Result<Vec<ReviewComment>, RemoteCallFailed> {
        let url = format!("{}/{number}/comments", self.pulls_url());

        self.get_json(&url, &[]).await
    }

    #[instrument(name = "GitHubCodeHostClient::list_open_pull_requests", skip(self))]
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>, RemoteCallFailed> {
        self.get_json(&self.pulls_url(), &[("state", "open")]).await
    }
}
