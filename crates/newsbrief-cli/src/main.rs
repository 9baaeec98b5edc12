mod render;

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use newsbrief_core::{AppConfig, SummarizeResponse};
use newsbrief_pipeline::{CompanyChecker, NewsClient, NewsPipeline};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newsbrief")]
#[command(about = "Summarize recent news coverage of a company")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect, annotate, and compare recent articles about a company
    Summarize {
        /// Company name to search for
        company: String,

        /// Print the raw JSON payload instead of the text report
        #[arg(long)]
        json: bool,

        /// Skip the confirmation prompt for names that do not look like companies
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Score how likely a name is to refer to a listed company
    Check {
        /// Company name to score
        company: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = newsbrief_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Summarize { company, json, yes } => {
            run_summarize(&config, company.trim(), json, yes).await
        }
        Commands::Check { company } => run_check(&config, company.trim()).await,
    }
}

async fn run_summarize(
    config: &AppConfig,
    company: &str,
    json: bool,
    yes: bool,
) -> anyhow::Result<()> {
    if company.is_empty() {
        anyhow::bail!("company name must not be empty");
    }

    if config.validate_company && !yes {
        let checker = company_checker(config)?;
        let confidence = checker.confidence(company).await;
        // stdout carries only the report.
        eprintln!(
            "confidence that '{company}' is a company: {}/3",
            confidence.score()
        );
        if !confidence.is_company() && !confirm("Continue anyway? [y/N] ")? {
            let rejected = SummarizeResponse::rejected();
            print_response(&rejected, json)?;
            return Ok(());
        }
    }

    let pipeline = NewsPipeline::from_config(config)?;
    tracing::info!(
        company,
        target = config.target_count,
        max_rounds = config.max_rounds,
        "starting news pipeline"
    );
    let response = SummarizeResponse::Report(pipeline.run(company).await);
    print_response(&response, json)
}

async fn run_check(config: &AppConfig, company: &str) -> anyhow::Result<()> {
    let confidence = company_checker(config)?.confidence(company).await;
    println!("{}", render::confidence_line(company, confidence));
    Ok(())
}

fn company_checker(config: &AppConfig) -> anyhow::Result<CompanyChecker> {
    Ok(CompanyChecker::new(
        NewsClient::from_config(config)?,
        config.web_search_url.clone(),
    ))
}

fn print_response(response: &SummarizeResponse, json: bool) -> anyhow::Result<()> {
    print!("{}", render::render_output(response, json)?);
    io::stdout().flush()?;
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    eprint!("{prompt}");
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(render::is_affirmative(&answer))
}
