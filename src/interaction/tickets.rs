//! Ticket formatters backed by the issue tracker.

use tracing::instrument;

use crate::{
    base::types::RemoteCallFailed,
    service::issues::{Issue, IssueClient, SearchResults},
};

use super::truncate;

/// Longest description shown before truncation kicks in.
const DESCRIPTION_LIMIT: usize = 150;

/// JQL filter identifying blocked work.
const BLOCKED_JQL: &str = "status = Blocked OR labels = blocked";

/// Most blocked tickets shown per response.
const BLOCKED_TICKET_LIMIT: usize = 10;

/// Fetch a single ticket and render its status block.
#[instrument(skip(issues))]
pub async fn ticket_status(issues: &IssueClient, key: &str) -> Result<String, RemoteCallFailed> {
    let issue = issues.get_issue(key).await?;

    Ok(render_ticket_status(key, &issue))
}

/// Search for blocked tickets and render the listing.
#[instrument(skip_all)]
pub async fn blocked_tickets(issues: &IssueClient) -> Result<String, RemoteCallFailed> {
    let results = issues.search_issues(BLOCKED_JQL, BLOCKED_TICKET_LIMIT as u32).await?;

    Ok(render_blocked_tickets(&results))
}

fn render_ticket_status(key: &str, issue: &Issue) -> String {
    let fields = &issue.fields;

    let title = fields.summary.as_deref().unwrap_or("No title");
    let description = truncate(fields.description.as_deref().unwrap_or("No description"), DESCRIPTION_LIMIT);
    let status = fields.status.as_ref().and_then(|s| s.name.as_deref()).unwrap_or("Unknown");
    let assignee = fields.assignee.as_ref().and_then(|a| a.display_name.as_deref()).unwrap_or("Unassigned");

    format!("Ticket: {key}\nTitle: {title}\nDescription: {description}\nStatus: {status}\nAssignee: {assignee}")
}

fn render_blocked_tickets(results: &SearchResults) -> String {
    if results.issues.is_empty() {
        return "There are no blocked tickets.".to_string();
    }

    let mut result = format!("Blocked Tickets ({}):\n", results.total);

    for issue in results.issues.iter().take(BLOCKED_TICKET_LIMIT) {
        let key = issue.key.as_deref().unwrap_or("?");
        let title = issue.fields.summary.as_deref().unwrap_or("Unknown ticket");
        let status = issue.fields.status.as_ref().and_then(|s| s.name.as_deref()).unwrap_or("Unknown");

        result.push_str(&format!("- {key}: {title} (Status: {status})\n"));
    }

    // The remainder comes from the server-reported total, not the page size.
    if results.total as usize > BLOCKED_TICKET_LIMIT {
        result.push_str(&format!("... and {} more blocked tickets", results.total as usize - BLOCKED_TICKET_LIMIT));
    }

    result
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::issues::{IssueAssignee, IssueFields, IssueStatus};

    fn issue(key: &str, summary: &str, status: &str) -> Issue {
        Issue {
            key: Some(key.to_string()),
            fields: IssueFields {
                summary: Some(summary.to_string()),
                description: None,
                status: Some(IssueStatus { name: Some(status.to_string()) }),
                assignee: None,
            },
        }
    }

    #[test]
    fn test_render_ticket_status_full() {
        let issue = Issue {
            key: Some("PROJ-123".to_string()),
            fields: IssueFields {
                summary: Some("Fix the login flow".to_string()),
                description: Some("Users get logged out.".to_string()),
                status: Some(IssueStatus { name: Some("In Progress".to_string()) }),
                assignee: Some(IssueAssignee {
                    display_name: Some("Jamie Chen".to_string()),
                }),
            },
        };

        assert_eq!(
            render_ticket_status("PROJ-123", &issue),
            "Ticket: PROJ-123\nTitle: Fix the login flow\nDescription: Users get logged out.\nStatus: In Progress\nAssignee: Jamie Chen"
        );
    }

    #[test]
    fn test_render_ticket_status_fallbacks() {
        let rendered = render_ticket_status("PROJ-9", &Issue::default());

        assert_eq!(
            rendered,
            "Ticket: PROJ-9\nTitle: No title\nDescription: No description\nStatus: Unknown\nAssignee: Unassigned"
        );
    }

    #[test]
    fn test_render_ticket_status_truncates_long_description() {
        let long = "d".repeat(151);
        let mut issue = Issue::default();
        issue.fields.description = Some(long);

        let rendered = render_ticket_status("PROJ-1", &issue);

        assert!(rendered.contains(&format!("Description: {}...", "d".repeat(147))));
    }

    #[test]
    fn test_render_ticket_status_keeps_exact_limit_description() {
        let exact = "d".repeat(150);
        let mut issue = Issue::default();
        issue.fields.description = Some(exact.clone());

        let rendered = render_ticket_status("PROJ-1", &issue);

        assert!(rendered.contains(&format!("Description: {exact}\n")));
    }

    #[test]
    fn test_render_ticket_status_is_idempotent() {
        let issue = issue("PROJ-2", "A ticket", "Blocked");

        assert_eq!(render_ticket_status("PROJ-2", &issue), render_ticket_status("PROJ-2", &issue));
    }

    #[test]
    fn test_render_blocked_tickets_empty() {
        assert_eq!(render_blocked_tickets(&SearchResults::default()), "There are no blocked tickets.");
    }

    #[test]
    fn test_render_blocked_tickets_listing() {
        let results = SearchResults {
            total: 2,
            issues: vec![issue("PROJ-1", "First", "Blocked"), issue("PROJ-2", "Second", "Blocked")],
        };

        assert_eq!(
            render_blocked_tickets(&results),
            "Blocked Tickets (2):\n- PROJ-1: First (Status: Blocked)\n- PROJ-2: Second (Status: Blocked)\n"
        );
    }

    #[test]
    fn test_render_blocked_tickets_remainder_uses_server_total() {
        let issues = (0..10).map(|i| issue(&format!("PROJ-{i}"), "Ticket", "Blocked")).collect();
        let results = SearchResults { total: 14, issues };
        let rendered = render_blocked_tickets(&results);

        assert_eq!(rendered.lines().filter(|line| line.starts_with("- ")).count(), 10);
        assert!(rendered.ends_with("... and 4 more blocked tickets"));
    }
}
