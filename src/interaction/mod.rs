//! Query handling and response formatting for status-bot.
//!
//! This module maps free-text questions onto the service clients:
//! - Classifying queries into intents and dispatching them to formatters
//! - Formatting ticket lookups and blocked-ticket searches
//! - Formatting pull-request reviews, comments, and listings

pub mod pulls;
pub mod query;
pub mod tickets;

/// Truncate to `limit` characters, replacing the tail with an ellipsis when
/// the text is longer.
pub(crate) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head = text.chars().take(limit - 3).collect::<String>();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_at_exact_limit_is_untouched() {
        let text = "a".repeat(150);

        assert_eq!(truncate(&text, 150), text);
    }

    #[test]
    fn test_truncate_one_past_limit_keeps_head_plus_ellipsis() {
        let text = "a".repeat(151);
        let result = truncate(&text, 150);

        assert_eq!(result.len(), 150);
        assert_eq!(result, format!("{}...", "a".repeat(147)));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "é".repeat(20);

        assert_eq!(truncate(&text, 10), format!("{}...", "é".repeat(7)));
    }
}
