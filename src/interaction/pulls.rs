//! Pull-request formatters backed by the code host.

use std::collections::HashMap;

use tracing::instrument;

use crate::{
    base::types::RemoteCallFailed,
    service::code::{CodeHostClient, PullRequest, Review, ReviewComment},
};

use super::truncate;

/// Longest comment body shown before truncation kicks in.
const COMMENT_BODY_LIMIT: usize = 100;

/// Most comments shown per response.
const COMMENT_LIMIT: usize = 5;

/// Most open pull requests shown per response.
const OPEN_PR_LIMIT: usize = 10;

/// Fetch a PR's reviews and render the per-reviewer state summary.
#[instrument(skip(code))]
pub async fn pr_reviewers(code: &CodeHostClient, number: &str) -> Result<String, RemoteCallFailed> {
    let reviews = code.list_reviews(number).await?;
    let pr = code.get_pull_request(number).await?;

    Ok(render_pr_reviewers(number, &pr, &reviews))
}

/// Fetch a PR's review comments and render the first few.
#[instrument(skip(code))]
pub async fn pr_comments(code: &CodeHostClient, number: &str) -> Result<String, RemoteCallFailed> {
    let comments = code.list_review_comments(number).await?;
    let pr = code.get_pull_request(number).await?;

    Ok(render_pr_comments(number, &pr, &comments))
}

/// Fetch and render the open pull requests of the configured repository.
#[instrument(skip_all)]
pub async fn open_prs(code: &CodeHostClient) -> Result<String, RemoteCallFailed> {
    let prs = code.list_open_pull_requests().await?;

    Ok(render_open_prs(&prs))
}

fn render_pr_reviewers(number: &str, pr: &PullRequest, reviews: &[Review]) -> String {
    let title = pr.title.as_deref().unwrap_or("Unknown PR");

    if reviews.is_empty() {
        return format!("PR #{number} ({title}) has no reviews yet.");
    }

    // Later reviews overwrite earlier ones per reviewer; reviewers are listed
    // in order of first appearance.
    let mut order = Vec::new();
    let mut states: HashMap<&str, &str> = HashMap::new();

    for review in reviews {
        let reviewer = review.user.as_ref().and_then(|u| u.login.as_deref()).unwrap_or("Unknown");
        let state = review.state.as_deref().unwrap_or("Unknown");

        if states.insert(reviewer, state).is_none() {
            order.push(reviewer);
        }
    }

    let mut result = format!("PR #{number} ({title}) reviews:\n");

    for reviewer in order {
        result.push_str(&format!("- {reviewer}: {}\n", states[reviewer]));
    }

    result
}

fn render_pr_comments(number: &str, pr: &PullRequest, comments: &[ReviewComment]) -> String {
    let title = pr.title.as_deref().unwrap_or("Unknown PR");

    if comments.is_empty() {
        return format!("PR #{number} ({title}) has no review comments yet.");
    }

    let mut result = format!("PR #{number} ({title}) comments:\n");

    for comment in comments.iter().take(COMMENT_LIMIT) {
        let user = comment.user.as_ref().and_then(|u| u.login.as_deref()).unwrap_or("Unknown");
        let body = truncate(comment.body.as_deref().unwrap_or("No content"), COMMENT_BODY_LIMIT);

        result.push_str(&format!("- {user}: {body}\n"));
    }

    if comments.len() > COMMENT_LIMIT {
        result.push_str(&format!("... and {} more comments", comments.len() - COMMENT_LIMIT));
    }

    result
}

fn render_open_prs(prs: &[PullRequest]) -> String {
    if prs.is_empty() {
        return "There are no open pull requests.".to_string();
    }

    let mut result = format!("Open Pull Requests ({}):\n", prs.len());

    for pr in prs.iter().take(OPEN_PR_LIMIT) {
        let number = pr.number.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
        let title = pr.title.as_deref().unwrap_or("Unknown PR");
        let user = pr.user.as_ref().and_then(|u| u.login.as_deref()).unwrap_or("Unknown");

        result.push_str(&format!("- PR #{number} by {user}: {title}\n"));
    }

    if prs.len() > OPEN_PR_LIMIT {
        result.push_str(&format!("... and {} more open PRs", prs.len() - OPEN_PR_LIMIT));
    }

    result
}

// Tests.
