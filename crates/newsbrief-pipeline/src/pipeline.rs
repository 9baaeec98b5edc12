//! Search-round orchestration.

use std::collections::HashSet;

use newsbrief_core::{AppConfig, ArticleRecord, PipelineResult, Shortfall, SummarizeResponse};

use crate::aggregate::aggregate;
use crate::client::NewsClient;
use crate::company::CompanyValidator;
use crate::error::NewsError;
use crate::extractor::{ArticleExtractor, SummaryExtractor};
use crate::fetcher::{BingNewsFetcher, LinkFetcher};
use crate::sentiment::SentimentClassifier;
use crate::topics::extract_topics;

/// Suffixes appended to the company name, one per round, cycling.
pub const QUERY_SUFFIXES: [&str; 5] = [
    "news",
    "latest updates",
    "recent headlines",
    "industry news",
    "company updates",
];

/// Budgets for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Number of validated summaries to collect before stopping.
    pub target_count: usize,
    /// Maximum number of search rounds.
    pub max_rounds: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            target_count: 10,
            max_rounds: 7,
        }
    }
}

impl PipelineSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            target_count: config.target_count,
            max_rounds: config.max_rounds,
        }
    }
}

/// The HTTP-backed pipeline used by the server and the CLI.
pub type NewsPipeline = Pipeline<BingNewsFetcher, ArticleExtractor>;

/// Per-run mutable state. Lives on the stack of one [`Pipeline::run`].
#[derive(Debug)]
struct SearchRound {
    round_counter: u32,
    checked_links: HashSet<String>,
    query_variants: Vec<String>,
}

impl SearchRound {
    fn new(company: &str) -> Self {
        Self {
            round_counter: 0,
            checked_links: HashSet::new(),
            query_variants: QUERY_SUFFIXES
                .iter()
                .map(|suffix| format!("{company} {suffix}"))
                .collect(),
        }
    }

    fn current_query(&self) -> &str {
        let index = self.round_counter as usize % self.query_variants.len();
        &self.query_variants[index]
    }

    /// Record `link` as checked. Returns `false` if it was already seen.
    fn mark_checked(&mut self, link: &str) -> bool {
        self.checked_links.insert(link.to_owned())
    }
}

/// Orchestrates search rounds, extraction, and annotation.
///
/// Holds only immutable services; all run state is created per call, so a
/// shared `Pipeline` is safe to use from concurrent requests.
pub struct Pipeline<F, E> {
    fetcher: F,
    extractor: E,
    classifier: SentimentClassifier,
    settings: PipelineSettings,
}

impl NewsPipeline {
    /// Build the HTTP-backed pipeline from application config.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, NewsError> {
        let client = NewsClient::from_config(config)?;
        Ok(Self::new(
            BingNewsFetcher::new(client.clone(), config.news_search_url.clone()),
            ArticleExtractor::new(client, config.summary_word_limit),
            SentimentClassifier::new(),
            PipelineSettings::from_config(config),
        ))
    }
}

impl<F, E> Pipeline<F, E>
where
    F: LinkFetcher + Sync,
    E: SummaryExtractor + Sync,
{
    #[must_use]
    pub fn new(
        fetcher: F,
        extractor: E,
        classifier: SentimentClassifier,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            classifier,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> PipelineSettings {
        self.settings
    }

    /// Run the pre-check, then the pipeline if the name passes.
    pub async fn summarize<V>(&self, validator: &V, company: &str) -> SummarizeResponse
    where
        V: CompanyValidator + Sync,
    {
        if !validator.is_company_name(company).await {
            tracing::info!(company, "pre-check rejected company name");
            return SummarizeResponse::rejected();
        }
        SummarizeResponse::Report(self.run(company).await)
    }

    /// Collect up to `target_count` validated summaries for `company`.
    ///
    /// Each round searches with the next query variant, then extracts every
    /// link not seen earlier in this run. The loop stops once the target is
    /// reached or `max_rounds` rounds have been spent. Fetch and extraction
    /// failures are logged and skipped; this never fails.
    pub async fn run(&self, company: &str) -> PipelineResult {
        let target = self.settings.target_count;
        let mut state = SearchRound::new(company);
        let mut articles: Vec<ArticleRecord> = Vec::new();

        while articles.len() < target && state.round_counter < self.settings.max_rounds {
            let query = state.current_query().to_owned();
            let links = match self.fetcher.fetch_links(&query).await {
                Ok(links) => links,
                Err(e) => {
                    tracing::warn!(
                        company,
                        round = state.round_counter + 1,
                        query = %query,
                        error = %e,
                        "news search failed"
                    );
                    Vec::new()
                }
            };
            state.round_counter += 1;
            tracing::debug!(
                company,
                round = state.round_counter,
                query = %query,
                links = links.len(),
                "search round fetched links"
            );

            for link in links {
                if !state.mark_checked(&link) {
                    continue;
                }

                match self.extractor.extract_summary(&link, company).await {
                    Ok(summary) => articles.push(self.annotate(summary, link)),
                    Err(e) => {
                        tracing::debug!(company, url = %link, error = %e, "link rejected");
                    }
                }

                if articles.len() >= target {
                    break;
                }
            }
        }

        tracing::info!(
            company,
            rounds = state.round_counter,
            links_checked = state.checked_links.len(),
            articles = articles.len(),
            "news pipeline finished"
        );

        self.shape_result(company, articles, &state)
    }

    fn annotate(&self, summary: String, source: String) -> ArticleRecord {
        ArticleRecord {
            sentiment: self.classifier.classify(&summary),
            topics: extract_topics(&summary),
            summary,
            source,
        }
    }

    fn shape_result(
        &self,
        company: &str,
        articles: Vec<ArticleRecord>,
        state: &SearchRound,
    ) -> PipelineResult {
        let target = self.settings.target_count;
        let comparative_analysis = if articles.is_empty() {
            None
        } else {
            Some(aggregate(&articles, company))
        };

        let shortfall = (articles.len() < target).then(|| Shortfall {
            error: format!("Could not find {target} valid summaries."),
            available_count: articles.len(),
            total_links_checked: state.checked_links.len(),
        });

        PipelineResult {
            company: company.to_owned(),
            news_summaries: articles,
            comparative_analysis,
            shortfall,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
