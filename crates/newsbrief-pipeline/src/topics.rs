//! Naive keyword topics.

use crate::text::top_by_frequency;

/// Maximum number of topics attached to one article.
pub const MAX_TOPICS: usize = 5;

/// Tokens must be longer than this many characters to count as a topic.
const MIN_TOPIC_CHARS: usize = 3;

/// Derive up to five keyword topics from `text`.
///
/// Keeps whitespace-delimited tokens longer than three characters, then
/// lower-cases them and strips surrounding punctuation. Returns the most
/// frequent distinct ones (ties broken by first appearance).
#[must_use]
pub fn extract_topics(text: &str) -> Vec<String> {
    let tokens = text
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOPIC_CHARS)
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty());
    top_by_frequency(tokens, MAX_TOPICS)
}
