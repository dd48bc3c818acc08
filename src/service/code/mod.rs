pub mod github;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;

use crate::base::types::RemoteCallFailed;

// Traits.

/// Generic code-host trait that clients must implement.
///
/// This trait defines the core functionality for reading pull-request data
/// out of a source-control host. Implementing this trait allows different
/// hosts to be used with the status-bot.
#[async_trait]
pub trait GenericCodeHostClient: Send + Sync + 'static {
    /// Fetch the metadata of a single pull request.
    async fn get_pull_request(&self, number: &str) -> Result<PullRequest, RemoteCallFailed>;

    /// Fetch the ordered review list of a pull request.
    async fn list_reviews(&self, number: &str) -> Result<Vec<Review>, RemoteCallFailed>;

    /// Fetch the ordered review-comment list of a pull request.
    async fn list_review_comments(&self, number: &str) -> Result<Vec<ReviewComment>, RemoteCallFailed>;

    /// Fetch the open pull requests of the configured repository, in the
    /// host's order.
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>, RemoteCallFailed>;
}

// Structs.

/// Code-host client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct CodeHostClient {
    inner: Arc<dyn GenericCodeHostClient>,
}

impl Deref for CodeHostClient {
    type Target = dyn GenericCodeHostClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl CodeHostClient {
    pub fn new(inner: Arc<dyn GenericCodeHostClient>) -> Self {
        Self { inner }
    }
}

// Data types.
//
// Only the fields the formatters read are modeled; every field is optional
// so missing data degrades to its fallback instead of failing the request.

/// Pull-request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user: Option<Account>,
}

/// One review on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user: Option<Account>,
    #[serde(default)]
    pub state: Option<String>,
}

/// One review comment on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewComment {
    #[serde(default)]
    pub user: Option<Account>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A code-host account reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub login: Option<String>,
}
