//! Comparative analysis over a finished set of articles.

use std::collections::BTreeMap;

use newsbrief_core::{ArticleRecord, ComparativeAnalysis, Sentiment};

use crate::text::{mentions, split_sentences, top_by_frequency};

const TOP_TOPICS: usize = 5;
const TOP_SOURCES: usize = 3;
const OVERALL_SUMMARY_SENTENCES: usize = 5;

/// Build the comparative analysis for `articles`.
///
/// Pure function of its inputs: calling it twice on the same slice yields
/// identical output.
#[must_use]
pub fn aggregate(articles: &[ArticleRecord], company: &str) -> ComparativeAnalysis {
    let mut sentiment_distribution: BTreeMap<Sentiment, usize> = BTreeMap::new();
    for article in articles {
        *sentiment_distribution.entry(article.sentiment).or_insert(0) += 1;
    }

    let top_topics = top_by_frequency(
        articles.iter().flat_map(|a| a.topics.iter().cloned()),
        TOP_TOPICS,
    );
    let top_sources = top_by_frequency(
        articles.iter().map(|a| source_domain(&a.source)),
        TOP_SOURCES,
    );

    let example_negative_summary = articles
        .iter()
        .find(|a| a.sentiment == Sentiment::Negative)
        .map(|a| a.summary.clone());

    ComparativeAnalysis {
        sentiment_distribution,
        top_topics,
        top_sources,
        overall_summary: overall_summary(articles, company),
        example_negative_summary,
    }
}

/// First five sentences of the concatenated summaries that mention
/// `company`, falling back to all summaries when none do. Always ends
/// in terminal punctuation.
#[must_use]
pub fn overall_summary(articles: &[ArticleRecord], company: &str) -> String {
    let matching: Vec<&str> = articles
        .iter()
        .map(|a| a.summary.as_str())
        .filter(|summary| mentions(summary, company))
        .collect();
    let full_text = if matching.is_empty() {
        articles
            .iter()
            .map(|a| a.summary.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        matching.join(" ")
    };

    let mut summary = split_sentences(&full_text)
        .into_iter()
        .take(OVERALL_SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");
    if !summary.ends_with(['.', '!', '?']) {
        summary.push('.');
    }
    summary
}

/// Host (and non-default port) of a source URL.
///
/// Falls back to stripping the scheme and path by hand when the URL does
/// not parse.
#[must_use]
pub fn source_domain(source: &str) -> String {
    if let Ok(url) = reqwest::Url::parse(source) {
        if let Some(host) = url.host_str() {
            return match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_owned(),
            };
        }
    }
    let without_scheme = source
        .strip_prefix("https://")
        .or_else(|| source.strip_prefix("http://"))
        .unwrap_or(source);
    without_scheme
        .split('/')
        .next()
        .unwrap_or(source)
        .to_owned()
}
