//! Integration tests for the HTTP-backed fetcher, extractor, company
//! pre-check, and the assembled pipeline.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use std::time::Duration;

use newsbrief_core::{AppConfig, SummarizeResponse};
use newsbrief_pipeline::{
    ArticleExtractor, BingNewsFetcher, CompanyChecker, CompanyValidator, LinkFetcher, NewsClient,
    NewsError, NewsPipeline, SummaryExtractor,
};
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a `NewsClient` suitable for tests: short timeouts, descriptive UA.
fn test_client() -> NewsClient {
    NewsClient::new("newsbrief-test/0.1", 5, 1).expect("failed to build test NewsClient")
}

fn test_config(server: &MockServer, target_count: usize) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().expect("socket addr"),
        log_level: "debug".to_string(),
        user_agent: "newsbrief-test/0.1".to_string(),
        news_search_url: format!("{}/news/search", server.uri()),
        web_search_url: format!("{}/search", server.uri()),
        search_timeout_secs: 5,
        article_timeout_secs: 1,
        target_count,
        max_rounds: 7,
        summary_word_limit: 75,
        validate_company: true,
    }
}

fn results_page(links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|l| format!("<a href=\"{l}\">story</a>"))
        .collect();
    format!("<html><body><a href=\"/settings\">settings</a>{anchors}</body></html>")
}

fn article_page(company: &str) -> String {
    format!(
        "<html><body>\
         <p>Menu</p>\
         <p>{company} reported strong profit growth this quarter as demand for its vehicles rose sharply.</p>\
         <p>Analysts said the results from {company} beat expectations and lifted investor confidence across the sector.</p>\
         </body></html>"
    )
}

// ---------------------------------------------------------------------------
// Fetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetcher_sends_encoded_query_and_returns_absolute_links() {
    let server = MockServer::start().await;
    let links = vec![
        "https://a.example.com/1".to_string(),
        "https://b.example.com/2".to_string(),
        "https://a.example.com/1".to_string(),
    ];

    Mock::given(method("GET"))
        .and(path("/news/search"))
        .and(query_param("q", "Tata Motors news"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&links)))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = BingNewsFetcher::new(test_client(), format!("{}/news/search", server.uri()));
    let result = fetcher.fetch_links("Tata Motors news").await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert_eq!(
        result.unwrap(),
        vec!["https://a.example.com/1", "https://b.example.com/2"]
    );
}

#[tokio::test]
async fn fetcher_reports_non_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = BingNewsFetcher::new(test_client(), format!("{}/news/search", server.uri()));
    let err = fetcher.fetch_links("Acme news").await.unwrap_err();

    assert!(
        matches!(err, NewsError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extractor_summarizes_relevant_article() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/story"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("Acme Corp")))
        .mount(&server)
        .await;

    let extractor = ArticleExtractor::new(test_client(), 75);
    let summary = extractor
        .extract_summary(&format!("{}/story", server.uri()), "acme corp")
        .await
        .expect("summary");

    assert!(summary.starts_with("Acme Corp reported strong profit growth"));
    assert!(!summary.contains("Menu"));
    assert!(summary.split_whitespace().count() <= 75);
}

#[tokio::test]
async fn extractor_rejects_article_without_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/story"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("Globex")))
        .mount(&server)
        .await;

    let extractor = ArticleExtractor::new(test_client(), 75);
    let err = extractor
        .extract_summary(&format!("{}/story", server.uri()), "Acme Corp")
        .await
        .unwrap_err();

    assert!(
        matches!(err, NewsError::CompanyNotMentioned { .. }),
        "expected CompanyNotMentioned, got: {err:?}"
    );
}

#[tokio::test]
async fn extractor_rejects_missing_article() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let extractor = ArticleExtractor::new(test_client(), 75);
    let err = extractor
        .extract_summary(&format!("{}/gone", server.uri()), "Acme")
        .await
        .unwrap_err();

    assert!(
        matches!(err, NewsError::UnexpectedStatus { status: 404, .. }),
        "expected UnexpectedStatus(404), got: {err:?}"
    );
}

#[tokio::test]
async fn extractor_times_out_slow_articles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(article_page("Acme"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let extractor = ArticleExtractor::new(test_client(), 75);
    let err = extractor
        .extract_summary(&format!("{}/slow", server.uri()), "Acme")
        .await
        .unwrap_err();

    assert!(matches!(err, NewsError::Http(_)), "expected Http, got: {err:?}");
}

// ---------------------------------------------------------------------------
// Company pre-check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn company_checker_scores_financial_results_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Acme stock"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<title>Acme stock price</title>\
             <a href=\"https://www.marketwatch.com/investing/stock/acme\">MW</a>",
        ))
        .mount(&server)
        .await;

    let checker = CompanyChecker::new(test_client(), format!("{}/search", server.uri()));
    let confidence = checker.confidence("Acme").await;

    assert_eq!(confidence.score(), 3);
    assert!(checker.is_company_name("Acme").await);
}

#[tokio::test]
async fn company_checker_treats_search_failure_as_unknown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let checker = CompanyChecker::new(test_client(), format!("{}/search", server.uri()));

    assert_eq!(checker.confidence("Acme").await.score(), 0);
    assert!(!checker.is_company_name("Acme").await);
}

// ---------------------------------------------------------------------------
// Assembled pipeline
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pipeline_collects_target_from_first_round() {
    let server = MockServer::start().await;
    let links: Vec<String> = (0..12)
        .map(|i| format!("{}/articles/{i}", server.uri()))
        .collect();

    Mock::given(method("GET"))
        .and(path("/news/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&links)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/articles/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("Acme Corp")))
        .expect(10)
        .mount(&server)
        .await;

    let config = test_config(&server, 10);
    let pipeline = NewsPipeline::from_config(&config).expect("pipeline");
    let result = pipeline.run("Acme Corp").await;

    assert!(result.is_complete(), "expected complete result: {result:?}");
    assert_eq!(result.news_summaries.len(), 10);
    let analysis = result.comparative_analysis.expect("analysis");
    assert_eq!(analysis.top_sources.len(), 1);
    assert!(analysis.overall_summary.ends_with('.'));
}

#[tokio::test]
async fn pipeline_reports_shortfall_when_pages_are_irrelevant() {
    let server = MockServer::start().await;
    let links: Vec<String> = (0..3)
        .map(|i| format!("{}/articles/{i}", server.uri()))
        .collect();

    Mock::given(method("GET"))
        .and(path("/news/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&links)))
        .expect(7)
        .mount(&server)
        .await;

    // Each article is fetched once even though every round returns it.
    Mock::given(method("GET"))
        .and(path_regex(r"^/articles/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(article_page("Globex")))
        .expect(3)
        .mount(&server)
        .await;

    let config = test_config(&server, 10);
    let pipeline = NewsPipeline::from_config(&config).expect("pipeline");
    let result = pipeline.run("Acme Corp").await;

    let shortfall = result.shortfall.as_ref().expect("shortfall");
    assert_eq!(shortfall.available_count, 0);
    assert_eq!(shortfall.total_links_checked, 3);
    assert!(result.comparative_analysis.is_none());
}

#[tokio::test]
async fn summarize_rejects_non_company_before_searching_news() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>nothing useful</p>"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/news/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&server, 10);
    let pipeline = NewsPipeline::from_config(&config).expect("pipeline");
    let checker = CompanyChecker::new(test_client(), config.web_search_url.clone());

    let response = pipeline.summarize(&checker, "qwertyuiop").await;

    assert_eq!(response, SummarizeResponse::rejected());
}
