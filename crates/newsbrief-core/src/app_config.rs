use std::net::SocketAddr;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// `User-Agent` sent with every search and article request.
    pub user_agent: String,
    /// News-search endpoint; the query is appended as `?q=`.
    pub news_search_url: String,
    /// General web-search endpoint used by the company pre-check.
    pub web_search_url: String,
    pub search_timeout_secs: u64,
    /// Per-article fetch timeout.
    pub article_timeout_secs: u64,
    /// Number of validated summaries the pipeline tries to collect.
    pub target_count: usize,
    /// Upper bound on search rounds per pipeline run.
    pub max_rounds: u32,
    /// Word cap applied when truncating article text into a summary.
    pub summary_word_limit: usize,
    /// Run the company-name pre-check before the pipeline.
    pub validate_company: bool,
}
