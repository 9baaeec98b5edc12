//! Rendering of pipeline payloads for stdout.

use std::fmt;

use newsbrief_core::{ComparativeAnalysis, PipelineResult, SummarizeResponse};
use newsbrief_pipeline::CompanyConfidence;

/// Render a response as a human-readable report ending in a newline.
pub(crate) fn render_response(response: &SummarizeResponse) -> String {
    match response {
        SummarizeResponse::Rejected { error } => format!("{error}\n"),
        SummarizeResponse::Report(result) => Report(result).to_string(),
    }
}

/// Everything `summarize` writes to stdout: pretty JSON under `--json`,
/// the text report otherwise.
pub(crate) fn render_output(
    response: &SummarizeResponse,
    json: bool,
) -> serde_json::Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(response)?))
    } else {
        Ok(render_response(response))
    }
}

pub(crate) fn confidence_line(company: &str, confidence: CompanyConfidence) -> String {
    let verdict = if confidence.is_company() {
        "looks like a company"
    } else {
        "might not be a company"
    };
    format!(
        "{company}: score {}/3 ({verdict}; trusted source: {}, finance keywords: {}, quote paths: {})",
        confidence.score(),
        yes_no(confidence.trusted_source),
        yes_no(confidence.finance_keywords),
        yes_no(confidence.quote_paths),
    )
}

pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

struct Report<'a>(&'a PipelineResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "News report for {}", result.company)?;

        if let Some(shortfall) = &result.shortfall {
            writeln!(f, "warning: {}", shortfall.error)?;
            writeln!(
                f,
                "usable articles: {} of {} links checked",
                shortfall.available_count, shortfall.total_links_checked
            )?;
        }

        for (index, article) in result.news_summaries.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "[{}] {}", index + 1, article.source)?;
            writeln!(f, "    {}", article.summary)?;
            writeln!(f, "    sentiment: {}", article.sentiment)?;
            writeln!(f, "    topics: {}", join_or_none(&article.topics))?;
        }

        if let Some(analysis) = &result.comparative_analysis {
            writeln!(f)?;
            write_analysis(f, analysis)?;
        }
        Ok(())
    }
}

fn write_analysis(f: &mut fmt::Formatter<'_>, analysis: &ComparativeAnalysis) -> fmt::Result {
    writeln!(f, "Comparative analysis")?;
    let distribution = analysis
        .sentiment_distribution
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(f, "  sentiment: {distribution}")?;
    writeln!(f, "  top topics: {}", join_or_none(&analysis.top_topics))?;
    writeln!(f, "  top sources: {}", join_or_none(&analysis.top_sources))?;
    if let Some(negative) = &analysis.example_negative_summary {
        writeln!(f, "  negative example: {negative}")?;
    }
    writeln!(f, "  overall: {}", analysis.overall_summary)
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
