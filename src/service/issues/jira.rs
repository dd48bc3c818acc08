//! Issue-tracker integration for status-bot.
//!
//! This module provides the Jira implementation of the `GenericIssueClient`
//! trait: single-issue reads and JQL searches against the Jira Cloud REST
//! API, authenticated with the account email and an API token.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::base::{config::Config, types::RemoteCallFailed};

use super::{GenericIssueClient, Issue, IssueClient, SearchResults};

// Extra methods on `IssueClient` applied by the jira implementation.

impl IssueClient {
    pub fn jira(config: &Config) -> Self {
        let client = JiraIssueClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Jira issue client implementation.
#[derive(Clone)]
pub struct JiraIssueClient {
    client: reqwest::Client,
    config: Config,
}

impl JiraIssueClient {
    /// Create a new Jira issue client.
    #[instrument(name = "JiraIssueClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    /// Perform an authenticated GET and deserialize the JSON response.
    ///
    /// Transport failures and non-2xx statuses both surface as
    /// `RemoteCallFailed`.
    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T, RemoteCallFailed>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.config.jira_email, Some(&self.config.jira_api_token))
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl GenericIssueClient for JiraIssueClient {
    #[instrument(name = "JiraIssueClient::get_issue", skip(self))]
    async fn get_issue(&self, key: &str) -> Result<Issue, RemoteCallFailed> {
        let url = format!("{}/rest/api/3/issue/{key}", self.config.jira_base_url);

        self.get_json(&url, &[]).await
    }

    #[instrument(name = "JiraIssueClient::search_issues", skip(self))]
    async fn search_issues(&self, jql: &str, max_results: u32) -> Result<SearchResults, RemoteCallFailed> {
        let url = format!("{}/rest/api/3/search", self.config.jira_base_url);
        let query = [("jql", jql.to_string()), ("maxResults", max_results.to_string())];

        self.get_json(&url, &query).await
    }
}
