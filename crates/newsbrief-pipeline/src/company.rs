//! Company-name pre-check.
//!
//! Scores a web-search results page for signs that the query names a
//! listed company: links to financial news domains, finance vocabulary
//! in headings and snippets, and quote-style URL paths.

use std::future::Future;

use scraper::{Html, Selector};

use crate::client::{search_url, NewsClient};

const TRUSTED_DOMAINS: &[&str] = &[
    "investing.com",
    "marketwatch.com",
    "reuters.com",
    "moneycontrol.com",
    "bloomberg.com",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "stock",
    "share price",
    "financials",
    "market cap",
    "valuation",
    "company",
];

const QUOTE_PATHS: &[&str] = &["/stock", "/company", "/quote", "/share"];

/// Decides whether free text plausibly names a company.
pub trait CompanyValidator {
    fn is_company_name(&self, name: &str) -> impl Future<Output = bool> + Send;
}

/// Outcome of scoring one search-results page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanyConfidence {
    pub trusted_source: bool,
    pub finance_keywords: bool,
    pub quote_paths: bool,
}

impl CompanyConfidence {
    /// Number of signals present, `0..=3`.
    #[must_use]
    pub fn score(self) -> u8 {
        u8::from(self.trusted_source) + u8::from(self.finance_keywords) + u8::from(self.quote_paths)
    }

    #[must_use]
    pub fn is_company(self) -> bool {
        self.score() >= 1
    }
}

/// Runs `"<name> stock"` against a web-search endpoint and scores the page.
#[derive(Debug, Clone)]
pub struct CompanyChecker {
    client: NewsClient,
    search_url: String,
}

impl CompanyChecker {
    #[must_use]
    pub fn new(client: NewsClient, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    /// Score `name`. Search failures score zero.
    pub async fn confidence(&self, name: &str) -> CompanyConfidence {
        let url = search_url(&self.search_url, &format!("{name} stock"));
        match self.client.search_page(&url).await {
            Ok(body) => score_search_page(&body),
            Err(e) => {
                tracing::warn!(company = name, error = %e, "company pre-check search failed");
                CompanyConfidence::default()
            }
        }
    }
}

impl CompanyValidator for CompanyChecker {
    async fn is_company_name(&self, name: &str) -> bool {
        let confidence = self.confidence(name).await;
        tracing::debug!(
            company = name,
            score = confidence.score(),
            "company pre-check scored"
        );
        confidence.is_company()
    }
}

/// Score a search-results page without any network access.
#[must_use]
pub fn score_search_page(html: &str) -> CompanyConfidence {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("valid anchor selector");
    let text_blocks = Selector::parse("h2, p, title").expect("valid text selector");

    let hrefs: Vec<&str> = document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .collect();

    let trusted_source = hrefs
        .iter()
        .any(|href| TRUSTED_DOMAINS.iter().any(|domain| href.contains(domain)));
    let quote_paths = hrefs
        .iter()
        .any(|href| QUOTE_PATHS.iter().any(|path| href.contains(path)));
    let finance_keywords = document.select(&text_blocks).any(|block| {
        let text = block.text().collect::<String>().to_lowercase();
        FINANCE_KEYWORDS.iter().any(|keyword| text.contains(keyword))
    });

    CompanyConfidence {
        trusted_source,
        finance_keywords,
        quote_paths,
    }
}
