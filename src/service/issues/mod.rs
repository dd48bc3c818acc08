pub mod jira;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::base::types::RemoteCallFailed;

// Traits.

/// Generic issue-tracker trait that clients must implement.
///
/// This trait defines the core functionality for reading issues out of a
/// tracker. Implementing this trait allows different issue trackers to be
/// used with the status-bot.
#[async_trait]
pub trait GenericIssueClient: Send + Sync + 'static {
    /// Fetch a single issue by its key (e.g. `PROJ-123`).
    async fn get_issue(&self, key: &str) -> Result<Issue, RemoteCallFailed>;

    /// Run a JQL search, returning at most `max_results` issues per page
    /// along with the server-reported total.
    async fn search_issues(&self, jql: &str, max_results: u32) -> Result<SearchResults, RemoteCallFailed>;
}

// Structs.

/// Issue-tracker client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct IssueClient {
    inner: Arc<dyn GenericIssueClient>,
}

impl Deref for IssueClient {
    type Target = dyn GenericIssueClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl IssueClient {
    pub fn new(inner: Arc<dyn GenericIssueClient>) -> Self {
        Self { inner }
    }
}

// Data types.
//
// Only the fields the formatters read are modeled; everything else in the
// remote payload is ignored. Every field is optional so a missing or
// odd-shaped field degrades to its fallback instead of failing the request.

/// A single issue, as returned by the tracker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub fields: IssueFields,
}

/// The subset of issue fields the formatters read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    /// Jira Cloud v3 returns an ADF document object here; anything
    /// non-string is treated as absent.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
    #[serde(default)]
    pub assignee: Option<IssueAssignee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueStatus {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueAssignee {
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
}

/// One page of search results plus the server-reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Deserialize a string, mapping any other JSON shape to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_deserializes_adf_description_as_absent() {
        let payload = serde_json::json!({
            "key": "PROJ-123",
            "fields": {
                "summary": "Fix the login flow",
                "description": {
                    "type": "doc",
                    "version": 1,
                    "content": [
                        { "type": "paragraph", "content": [{ "type": "text", "text": "Users get logged out." }] }
                    ]
                },
                "status": { "name": "In Progress" },
                "assignee": null
            }
        });

        let issue: Issue = serde_json::from_value(payload).unwrap();

        assert_eq!(issue.fields.summary.as_deref(), Some("Fix the login flow"));
        assert_eq!(issue.fields.description, None);
        assert_eq!(issue.fields.assignee, None);
    }

    #[test]
    fn test_issue_deserializes_plain_string_description() {
        let payload = serde_json::json!({
            "fields": { "description": "Plain text." }
        });

        let issue: Issue = serde_json::from_value(payload).unwrap();

        assert_eq!(issue.fields.description.as_deref(), Some("Plain text."));
    }

    #[test]
    fn test_search_results_tolerate_missing_fields() {
        let payload = serde_json::json!({
            "issues": [{ "key": "PROJ-1" }]
        });

        let results: SearchResults = serde_json::from_value(payload).unwrap();

        assert_eq!(results.total, 0);
        assert_eq!(results.issues[0].key.as_deref(), Some("PROJ-1"));
        assert_eq!(results.issues[0].fields, IssueFields::default());
    }
}
