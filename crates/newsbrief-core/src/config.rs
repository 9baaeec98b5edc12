use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the
/// stock pipeline settings (10 summaries, 7 rounds, 75-word summaries).
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value = or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        Ok(value)
    };

    let bind_addr = parse_addr("NEWSBRIEF_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("NEWSBRIEF_LOG_LEVEL", "info");
    let user_agent = or_default("NEWSBRIEF_USER_AGENT", "Mozilla/5.0");
    let news_search_url = or_default(
        "NEWSBRIEF_NEWS_SEARCH_URL",
        "https://www.bing.com/news/search",
    );
    let web_search_url = or_default("NEWSBRIEF_WEB_SEARCH_URL", "https://www.bing.com/search");

    let search_timeout_secs = parse_u64("NEWSBRIEF_SEARCH_TIMEOUT_SECS", "15")?;
    let article_timeout_secs = parse_u64("NEWSBRIEF_ARTICLE_TIMEOUT_SECS", "5")?;

    let target_count = parse_positive("NEWSBRIEF_TARGET_COUNT", "10")?;
    let max_rounds = u32::try_from(parse_positive("NEWSBRIEF_MAX_ROUNDS", "7")?)
        .map_err(|e| invalid("NEWSBRIEF_MAX_ROUNDS", e.to_string()))?;
    let summary_word_limit = parse_positive("NEWSBRIEF_SUMMARY_WORD_LIMIT", "75")?;

    let validate_company = parse_bool(&or_default("NEWSBRIEF_VALIDATE_COMPANY", "true"))
        .ok_or_else(|| {
            invalid(
                "NEWSBRIEF_VALIDATE_COMPANY",
                "expected true/false, yes/no, or 1/0".to_string(),
            )
        })?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        user_agent,
        news_search_url,
        web_search_url,
        search_timeout_secs,
        article_timeout_secs,
        target_count,
        max_rounds,
        summary_word_limit,
        validate_company,
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
