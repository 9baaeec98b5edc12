//! Plain-text helpers shared by extraction, topics, and aggregation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// A sentence terminator followed by whitespace; the split point sits
/// right after the terminator.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));

/// Split text into sentences at `.`, `!`, or `?` followed by whitespace.
///
/// Terminators stay attached to their sentence. Empty pieces are dropped.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII.
        let end = boundary.start() + 1;
        push_nonempty(&mut sentences, &text[start..end]);
        start = boundary.end();
    }
    push_nonempty(&mut sentences, &text[start..]);
    sentences
}

fn push_nonempty<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}

/// Case-insensitive substring test used by the relevance gate.
#[must_use]
pub fn mentions(text: &str, company: &str) -> bool {
    text.to_lowercase().contains(&company.to_lowercase())
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Return the `n` most frequent items, ties broken by first appearance.
pub(crate) fn top_by_frequency<I>(items: I, n: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        if let Some(&slot) = index.get(&item) {
            order[slot].1 += 1;
        } else {
            index.insert(item.clone(), order.len());
            order.push((item, 1));
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().take(n).map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sentences_keeps_terminators() {
        let sentences = split_sentences("Acme grew. Profits rose! Will it last? Maybe");
        assert_eq!(
            sentences,
            vec!["Acme grew.", "Profits rose!", "Will it last?", "Maybe"]
        );
    }

    #[test]
    fn split_sentences_ignores_terminators_without_whitespace() {
        let sentences = split_sentences("Shares hit $4.50 today. Analysts cheered.");
        assert_eq!(sentences, vec!["Shares hit $4.50 today.", "Analysts cheered."]);
    }

    #[test]
    fn split_sentences_collapses_runs_of_whitespace() {
        let sentences = split_sentences("One.\n\n  Two.   ");
        assert_eq!(sentences, vec!["One.", "Two."]);
    }

    #[test]
    fn split_sentences_on_empty_text_is_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn mentions_is_case_insensitive() {
        assert!(mentions("Shares of TATA MOTORS rose", "Tata Motors"));
        assert!(!mentions("Shares of Tata Steel rose", "Tata Motors"));
    }

    #[test]
    fn top_by_frequency_breaks_ties_by_first_appearance() {
        let items = ["b", "a", "c", "a", "b", "d"].map(String::from);
        assert_eq!(top_by_frequency(items, 3), vec!["b", "a", "c"]);
    }

    #[test]
    fn top_by_frequency_caps_length() {
        let items = ["x", "y"].map(String::from);
        assert_eq!(top_by_frequency(items.clone(), 5).len(), 2);
        assert_eq!(top_by_frequency(items, 1), vec!["x"]);
    }
}
