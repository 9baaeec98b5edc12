//! Shared domain types and configuration for newsbrief.
//!
//! The pipeline, the HTTP server, and the CLI all speak in terms of the
//! types defined here: per-article records, the comparative analysis, and
//! the final pipeline payload.

mod app_config;
mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    ArticleRecord, ComparativeAnalysis, PipelineResult, Sentiment, Shortfall, SummarizeResponse,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
