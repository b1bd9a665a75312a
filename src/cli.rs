//! Command-line interface definitions for News Facts.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials can be provided via command-line flags or environment variables
//! (a `.env` file in the working directory is loaded first).

use clap::{Parser, ValueEnum};

/// Output format of the report file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain text with fixed-width separators
    Text,
    /// Markdown with one heading per article
    Markdown,
    /// The report serialized as JSON
    Json,
}

impl ReportFormat {
    /// File name used when `--output` is not given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Text => "news_report.txt",
            ReportFormat::Markdown => "news_report.md",
            ReportFormat::Json => "news_report.json",
        }
    }
}

/// Command-line arguments for the News Facts application.
///
/// # Examples
///
/// ```sh
/// # Facts about today's "apple" articles, two pages from NewsAPI
/// news_facts -q apple -p 2
///
/// # Markdown report including World News API top news
/// news_facts -q apple -f markdown --world-news
///
/// # Override model settings from a YAML file
/// news_facts -c ./settings.yaml -o ./out/report.txt
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Keyword query passed to the news search
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of result pages to fetch from NewsAPI
    #[arg(short, long, default_value_t = 2)]
    pub pages: u32,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Report file path (defaults to news_report.<ext> in the working directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Optional path to a YAML settings file (model, temperature, endpoints)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Maximum number of concurrent fact extraction requests
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Add a second section with today's top news from the World News API
    #[arg(long)]
    pub world_news: bool,

    /// NewsAPI key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,

    /// OpenAI (or compatible) API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// World News API key (only required with --world-news)
    #[arg(long, env = "WORLD_NEWS_API_KEY", hide_env_values = true)]
    pub world_news_api_key: Option<String>,
}
