use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Three-way sentiment label derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Compound score at or above which text is labelled positive.
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Compound score at or below which text is labelled negative.
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Map a compound polarity score in `[-1.0, 1.0]` to a label.
    #[must_use]
    pub fn from_compound(score: f64) -> Self {
        if score >= Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if score <= Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated, summarized, annotated news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// At most `summary_word_limit` words; always mentions the queried company.
    pub summary: String,
    pub sentiment: Sentiment,
    /// Up to five distinct keyword topics, most frequent first.
    pub topics: Vec<String>,
    /// URL the summary was extracted from.
    pub source: String,
}

/// Aggregate statistics over all articles collected in one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparativeAnalysis {
    /// Article count per label; labels with no articles are absent.
    pub sentiment_distribution: BTreeMap<Sentiment, usize>,
    pub top_topics: Vec<String>,
    /// Most frequent source hosts.
    pub top_sources: Vec<String>,
    pub overall_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_negative_summary: Option<String>,
}

/// Extra fields carried when the pipeline fell short of its target count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub error: String,
    pub available_count: usize,
    pub total_links_checked: usize,
}

/// Final payload of one pipeline run.
///
/// Serializes to `{company, news_summaries, comparative_analysis}`, plus
/// `{error, available_count, total_links_checked}` when `shortfall` is set.
/// A missing analysis serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub company: String,
    pub news_summaries: Vec<ArticleRecord>,
    #[serde(serialize_with = "analysis_or_empty")]
    pub comparative_analysis: Option<ComparativeAnalysis>,
    #[serde(flatten)]
    pub shortfall: Option<Shortfall>,
}

impl PipelineResult {
    /// `true` when the target number of summaries was reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shortfall.is_none()
    }
}

/// What the outer surfaces (HTTP, CLI) hand back for a company query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummarizeResponse {
    /// The pre-check decided the input is not a company; the pipeline never ran.
    Rejected { error: String },
    Report(PipelineResult),
}

impl SummarizeResponse {
    pub const REJECTED_MESSAGE: &'static str = "This might not be a valid company name.";

    #[must_use]
    pub fn rejected() -> Self {
        Self::Rejected {
            error: Self::REJECTED_MESSAGE.to_string(),
        }
    }
}

#[allow(clippy::ref_option)]
fn analysis_or_empty<S>(
    analysis: &Option<ComparativeAnalysis>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match analysis {
        Some(analysis) => analysis.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
