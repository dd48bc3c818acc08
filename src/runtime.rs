//! Runtime services and shared state for the status-bot.

use tracing::instrument;

use crate::{
    base::config::Config,
    service::{code::CodeHostClient, issues::IssueClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the issue-tracker client, the code-host client, and the
/// configuration. It is designed to be trivially cloneable, allowing it to be
/// passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The issue-tracker client instance.
    pub issues: IssueClient,
    /// The code-host client instance.
    pub code: CodeHostClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Self {
        // Initialize the issue tracker client.
        let issues = IssueClient::jira(&config);

        // Initialize the code host client.
        let code = CodeHostClient::github(&config);

        Self { config, issues, code }
    }
}
