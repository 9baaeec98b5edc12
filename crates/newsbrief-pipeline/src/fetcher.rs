//! News-search link collection.

use std::collections::HashSet;
use std::future::Future;

use scraper::{Html, Selector};

use crate::client::{search_url, NewsClient};
use crate::error::NewsError;

/// Source of candidate article links for a search query.
pub trait LinkFetcher {
    /// Return the distinct absolute links found for `query`, in page order.
    fn fetch_links(&self, query: &str)
        -> impl Future<Output = Result<Vec<String>, NewsError>> + Send;
}

/// Scrapes anchors from a Bing-style news-search results page.
#[derive(Debug, Clone)]
pub struct BingNewsFetcher {
    client: NewsClient,
    search_url: String,
}

impl BingNewsFetcher {
    #[must_use]
    pub fn new(client: NewsClient, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }
}

impl LinkFetcher for BingNewsFetcher {
    async fn fetch_links(&self, query: &str) -> Result<Vec<String>, NewsError> {
        let url = search_url(&self.search_url, query);
        let body = self.client.search_page(&url).await?;
        Ok(extract_result_links(&body))
    }
}

/// Collect every `<a href>` that carries an `http`/`https` scheme,
/// de-duplicated in document order.
#[must_use]
pub fn extract_result_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").expect("valid anchor selector");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if !(href.starts_with("http://") || href.starts_with("https://")) {
            continue;
        }
        if seen.insert(href) {
            links.push(href.to_owned());
        }
    }
    links
}
