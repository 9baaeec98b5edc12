//! Article download, relevance gate, and word-capped summarization.

use std::future::Future;

use scraper::{Html, Selector};

use crate::client::NewsClient;
use crate::error::NewsError;
use crate::text::{mentions, split_sentences, word_count};

/// Paragraphs with this many words or fewer are treated as boilerplate.
const MIN_PARAGRAPH_WORDS: usize = 10;

/// Turns a candidate link into a short summary that mentions the company.
pub trait SummaryExtractor {
    fn extract_summary(
        &self,
        url: &str,
        company: &str,
    ) -> impl Future<Output = Result<String, NewsError>> + Send;
}

/// Downloads article pages over HTTP and summarizes their paragraph text.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    client: NewsClient,
    word_limit: usize,
}

impl ArticleExtractor {
    #[must_use]
    pub fn new(client: NewsClient, word_limit: usize) -> Self {
        Self { client, word_limit }
    }
}

impl SummaryExtractor for ArticleExtractor {
    async fn extract_summary(&self, url: &str, company: &str) -> Result<String, NewsError> {
        let body = self.client.article_page(url).await?;
        summarize_page(&body, url, company, self.word_limit)
    }
}

/// Apply the paragraph filter, relevance gate, and word cap to one page.
///
/// # Errors
///
/// - [`NewsError::EmptyText`] when no paragraph survives the boilerplate filter.
/// - [`NewsError::CompanyNotMentioned`] when the text (or the truncated
///   summary) lacks the company name.
/// - [`NewsError::EmptySummary`] when the first sentence alone exceeds the cap.
pub fn summarize_page(
    html: &str,
    url: &str,
    company: &str,
    word_limit: usize,
) -> Result<String, NewsError> {
    let full_text = paragraph_text(html);
    if full_text.is_empty() {
        return Err(NewsError::EmptyText {
            url: url.to_owned(),
        });
    }
    if !mentions(&full_text, company) {
        return Err(NewsError::CompanyNotMentioned {
            url: url.to_owned(),
            company: company.to_owned(),
        });
    }

    let summary = truncate_to_words(&full_text, word_limit);
    if summary.is_empty() {
        return Err(NewsError::EmptySummary {
            url: url.to_owned(),
        });
    }
    // The name may only appear past the cap.
    if !mentions(&summary, company) {
        return Err(NewsError::CompanyNotMentioned {
            url: url.to_owned(),
            company: company.to_owned(),
        });
    }
    Ok(summary)
}

/// Join the text of every `<p>` with more than ten words, single-spaced.
#[must_use]
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p").expect("valid paragraph selector");

    document
        .select(&paragraphs)
        .map(|p| p.text().collect::<String>())
        .filter(|text| word_count(text) > MIN_PARAGRAPH_WORDS)
        .map(|text| text.trim().to_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greedily keep whole sentences while the running word count stays
/// within `word_limit`. The first sentence that would overflow ends the
/// summary; it is never cut mid-sentence.
#[must_use]
pub fn truncate_to_words(text: &str, word_limit: usize) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut words = 0;
    for sentence in split_sentences(text) {
        let sentence_words = word_count(sentence);
        if words + sentence_words > word_limit {
            break;
        }
        words += sentence_words;
        kept.push(sentence);
    }
    kept.join(" ")
}
