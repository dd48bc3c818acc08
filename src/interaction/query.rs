//! Query routing for status-bot.
//!
//! A query is trimmed, lower-cased, and matched against a fixed priority
//! list of patterns; the first match wins and decides which formatter runs.
//! The router itself performs no I/O.

use std::sync::OnceLock;

use regex::Regex;
use tracing::instrument;

use crate::{base::types::Intent, runtime::Runtime};

use super::{pulls, tickets};

/// Guidance returned for queries that match no pattern.
pub const HELP_TEXT: &str = "I'm not sure how to help with that query. You can ask about the status of a Jira ticket, who's reviewing a PR, comments on a PR, open PRs, or blocked tickets.";

// Statics.

static TICKET_STATUS_RE: OnceLock<Regex> = OnceLock::new();
static PR_REVIEWERS_RE: OnceLock<Regex> = OnceLock::new();
static PR_COMMENTS_RE: OnceLock<Regex> = OnceLock::new();

/// Ticket-key lookups, e.g. "status of proj-123".
fn ticket_status_re() -> &'static Regex {
    TICKET_STATUS_RE.get_or_init(|| Regex::new(r"status of ([a-z]+-\d+)").unwrap())
}

/// Reviewer lookups, e.g. "who is reviewing pr #42".
fn pr_reviewers_re() -> &'static Regex {
    PR_REVIEWERS_RE.get_or_init(|| Regex::new(r"who is reviewing (pr|pull request) #?(\d+)").unwrap())
}

/// Comment lookups, e.g. "feedback on pull request 42".
fn pr_comments_re() -> &'static Regex {
    PR_COMMENTS_RE.get_or_init(|| Regex::new(r"(comments|feedback) on (pr|pull request) #?(\d+)").unwrap())
}

// Routing.

/// Map a query to exactly one intent.
///
/// Patterns are checked in a fixed priority order against the normalized
/// query, so a query matching more than one pattern resolves to the earliest.
/// Matching is unanchored substring search; extracted ticket keys are
/// upper-cased.
pub fn classify(query: &str) -> Intent {
    let query = query.trim().to_lowercase();

    if let Some(caps) = ticket_status_re().captures(&query) {
        return Intent::TicketStatus { key: caps[1].to_uppercase() };
    }

    if let Some(caps) = pr_reviewers_re().captures(&query) {
        return Intent::PrReviewers { number: caps[2].to_string() };
    }

    if let Some(caps) = pr_comments_re().captures(&query) {
        return Intent::PrComments { number: caps[3].to_string() };
    }

    if query.contains("open pull requests") || query.contains("open prs") {
        return Intent::OpenPrs;
    }

    if query.contains("blocked tickets") || query.contains("blocking issues") {
        return Intent::BlockedTickets;
    }

    Intent::Unrecognized
}

/// Route a query to its formatter and return the response text.
///
/// Formatter failures are converted into a scoped error line here, so no
/// error ever escapes to the caller.
#[instrument(skip_all)]
pub async fn handle_query(runtime: &Runtime, query: &str) -> String {
    match classify(query) {
        Intent::TicketStatus { key } => tickets::ticket_status(&runtime.issues, &key)
            .await
            .unwrap_or_else(|err| format!("Error fetching Jira ticket {key}: {err}")),
        Intent::PrReviewers { number } => pulls::pr_reviewers(&runtime.code, &number)
            .await
            .unwrap_or_else(|err| format!("Error fetching PR #{number} reviewers: {err}")),
        Intent::PrComments { number } => pulls::pr_comments(&runtime.code, &number)
            .await
            .unwrap_or_else(|err| format!("Error fetching PR #{number} comments: {err}")),
        Intent::OpenPrs => pulls::open_prs(&runtime.code)
            .await
            .unwrap_or_else(|err| format!("Error fetching open PRs: {err}")),
        Intent::BlockedTickets => tickets::blocked_tickets(&runtime.issues)
            .await
            .unwrap_or_else(|err| format!("Error fetching blocked tickets: {err}")),
        Intent::Unrecognized => HELP_TEXT.to_string(),
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ticket_status_uppercases_key() {
        assert_eq!(
            classify("What is the status of proj-123?"),
            Intent::TicketStatus { key: "PROJ-123".to_string() }
        );

        assert_eq!(
            classify("STATUS OF ProJ-123"),
            Intent::TicketStatus { key: "PROJ-123".to_string() }
        );
    }

    #[test]
    fn test_classify_pr_reviewers_accepts_optional_hash() {
        assert_eq!(classify("Who is reviewing PR #45?"), Intent::PrReviewers { number: "45".to_string() });
        assert_eq!(classify("who is reviewing pull request 45"), Intent::PrReviewers { number: "45".to_string() });
    }

    #[test]
    fn test_classify_pr_comments_accepts_feedback_wording() {
        assert_eq!(classify("comments on pr #7"), Intent::PrComments { number: "7".to_string() });
        assert_eq!(classify("Any feedback on pull request 7?"), Intent::PrComments { number: "7".to_string() });
    }

    #[test]
    fn test_classify_open_prs_and_blocked_tickets_substrings() {
        assert_eq!(classify("show me open pull requests"), Intent::OpenPrs);
        assert_eq!(classify("  OPEN PRS  "), Intent::OpenPrs);
        assert_eq!(classify("are there any blocked tickets?"), Intent::BlockedTickets);
        assert_eq!(classify("list the blocking issues"), Intent::BlockedTickets);
    }

    #[test]
    fn test_classify_priority_order_is_respected() {
        // Matches both the reviewers and the comments pattern; reviewers is
        // checked first.
        assert_eq!(
            classify("who is reviewing pr #9 and what are the comments on pr #9"),
            Intent::PrReviewers { number: "9".to_string() }
        );

        // Ticket status outranks everything else.
        assert_eq!(
            classify("status of abc-1 and open prs"),
            Intent::TicketStatus { key: "ABC-1".to_string() }
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("what's the weather"), Intent::Unrecognized);
        assert_eq!(classify(""), Intent::Unrecognized);
        assert_eq!(classify("status of 123"), Intent::Unrecognized);
    }
}
