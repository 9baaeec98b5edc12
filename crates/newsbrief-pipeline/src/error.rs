use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no paragraph text found at {url}")]
    EmptyText { url: String },

    #[error("page at {url} does not mention \"{company}\"")]
    CompanyNotMentioned { url: String, company: String },

    #[error("no summary fits the word limit for {url}")]
    EmptySummary { url: String },
}
