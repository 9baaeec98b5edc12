use std::time::Duration;

use newsbrief_core::AppConfig;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::NewsError;

/// Shared HTTP client for search pages and article pages.
///
/// Cloning is cheap; all clones share one connection pool. Search and
/// article requests carry separate per-request timeouts.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    search_timeout: Duration,
    article_timeout: Duration,
}

impl NewsClient {
    /// Creates a `NewsClient` with the given `User-Agent` and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        user_agent: &str,
        search_timeout_secs: u64,
        article_timeout_secs: u64,
    ) -> Result<Self, NewsError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            search_timeout: Duration::from_secs(search_timeout_secs),
            article_timeout: Duration::from_secs(article_timeout_secs),
        })
    }

    /// # Errors
    ///
    /// See [`NewsClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, NewsError> {
        Self::new(
            &config.user_agent,
            config.search_timeout_secs,
            config.article_timeout_secs,
        )
    }

    /// Fetches a search-results page and returns its body.
    pub(crate) async fn search_page(&self, url: &str) -> Result<String, NewsError> {
        self.get_html(url, self.search_timeout).await
    }

    /// Fetches an article page and returns its body.
    pub(crate) async fn article_page(&self, url: &str) -> Result<String, NewsError> {
        self.get_html(url, self.article_timeout).await
    }

    async fn get_html(&self, url: &str, timeout: Duration) -> Result<String, NewsError> {
        let response = self.client.get(url).timeout(timeout).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}

/// Builds `<base>?q=<query>` with the query percent-encoded.
pub(crate) fn search_url(base: &str, query: &str) -> String {
    let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}q={encoded}")
}
