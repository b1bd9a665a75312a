//! # News Facts
//!
//! Fetches today's news articles from search APIs, asks an LLM to extract the
//! factual statements from each article, and writes them to a report file.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... OPENAI_API_KEY=... news_facts -q apple -p 2
//! ```
//!
//! ## Architecture
//!
//! The application is a straight pipeline:
//! 1. **Configuration**: Validate credentials before any network activity
//! 2. **Fetching**: Pull pages of articles from NewsAPI (and optionally the World News API)
//! 3. **Extraction**: Ask the completion service for facts, a bounded number at a time
//! 4. **Output**: Write a text, Markdown or JSON report

use clap::Parser;
use reqwest::{Client, ClientBuilder};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cache;
mod cli;
mod config;
mod extractor;
mod models;
mod outputs;
mod report;
mod sources;
#[cfg(test)]
mod test_support;
mod utils;

use api::OpenAiCompletion;
use cache::InMemoryCache;
use cli::Cli;
use config::Config;
use extractor::FactExtractor;
use models::Report;
use report::ReportWriter;
use sources::{ArticleSource, NewsApiSource, WorldNewsSource};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_facts starting up");

    // .env first so clap's env fallbacks can see it
    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "Loaded .env file");
    }
    let args = Cli::parse();
    debug!(query = ?args.query, pages = args.pages, format = ?args.format, "Parsed CLI arguments");

    let output_path = run(&args, Client::builder()).await?;
    println!("Report generated as '{}'.", output_path.display());

    info!(elapsed = ?start_time.elapsed(), "Execution complete");
    Ok(())
}

/// Validate configuration, fetch articles, extract facts and write the report.
///
/// Credentials and the output directory are checked before the HTTP client
/// is built, so a bad setup never touches the network. Returns the report path.
#[instrument(level = "info", skip_all)]
async fn run(args: &Cli, client: ClientBuilder) -> Result<PathBuf, Box<dyn Error>> {
    // ---- Fatal startup checks, before any network call ----
    let config = Config::from_cli(args).inspect_err(|e| {
        error!(error = %e, "Invalid configuration; aborting");
    })?;

    let output_path = args
        .output
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));
    let output_dir = output_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if let Err(e) = ensure_writable_dir(output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let client = client
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // ---- Fetch articles ----
    let newsapi = NewsApiSource::new(client.clone(), &config);
    let news_articles = newsapi.fetch(args.query.as_deref(), args.pages).await;
    info!(count = news_articles.len(), "Fetched NewsAPI articles");

    let world_news = WorldNewsSource::new(client.clone(), &config);
    let top_news = match &world_news {
        Some(source) => source.fetch(None, 1).await,
        None => Vec::new(),
    };

    // ---- Extract facts ----
    let extractor = FactExtractor::new(OpenAiCompletion::new(client, &config), InMemoryCache::new());
    let writer = ReportWriter::new(&extractor, args.concurrency);

    let mut sections = vec![writer.write(newsapi.name(), &news_articles).await];
    if let Some(source) = &world_news {
        sections.push(writer.write(source.name(), &top_news).await);
    }
    let report = Report::new(sections);

    // ---- Output ----
    if let Err(e) = outputs::write_report(&report, args.format, &output_path).await {
        error!(path = %output_path.display(), error = %e, "Failed writing report");
        return Err(e);
    }
    info!(
        articles = report.entry_count(),
        cached_texts = extractor.cache().len(),
        "Report written"
    );

    Ok(output_path)
}
