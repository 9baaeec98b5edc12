//! News aggregation pipeline for newsbrief.
//!
//! Searches a news engine for a company, extracts and truncates readable
//! article text, labels sentiment, derives keyword topics, and aggregates
//! everything into a comparative report. Each [`Pipeline::run`] owns its
//! own search state, so one pipeline can serve concurrent callers.

pub mod aggregate;
pub mod client;
pub mod company;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod sentiment;
pub mod text;
pub mod topics;

pub use aggregate::aggregate;
pub use client::NewsClient;
pub use company::{CompanyChecker, CompanyConfidence, CompanyValidator};
pub use error::NewsError;
pub use extractor::{ArticleExtractor, SummaryExtractor};
pub use fetcher::{BingNewsFetcher, LinkFetcher};
pub use pipeline::{NewsPipeline, Pipeline, PipelineSettings};
pub use sentiment::SentimentClassifier;
pub use topics::extract_topics;
