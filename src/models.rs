//! Data models for fetched articles and the generated report.
//!
//! This module defines the core data structures used throughout the application:
//! - [`ArticleRecord`]: A news item as returned by one of the search APIs
//! - [`NewsApiArticle`] / [`WorldNewsItem`]: Raw payload shapes of each API
//! - [`Report`], [`ReportSection`], [`ReportEntry`]: The extracted facts, ready to render

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An article fetched from a news-search API.
///
/// Built once by an article source and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// The headline, or `"No Title"` when the API omitted it.
    pub title: String,
    /// The article URL, or `"No URL"` when the API omitted it.
    pub url: String,
    /// The article text handed to the fact extractor. May be empty.
    pub body: String,
}

/// Pick the first non-empty candidate as the article body.
///
/// Search APIs return the full text and a short summary in separate, often
/// null, fields. Empty strings count as missing.
pub fn resolve_body(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Response envelope of the NewsAPI `everything` endpoint.
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

/// One entry of the NewsAPI `articles` array.
#[derive(Debug, Deserialize)]
pub struct NewsApiArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
}

impl From<NewsApiArticle> for ArticleRecord {
    fn from(a: NewsApiArticle) -> Self {
        ArticleRecord {
            title: a.title.unwrap_or_else(|| "No Title".to_string()),
            url: a.url.unwrap_or_else(|| "No URL".to_string()),
            body: resolve_body(a.content, a.description),
        }
    }
}

/// Response envelope of the World News API `search-news` endpoint.
#[derive(Debug, Deserialize)]
pub struct WorldNewsResponse {
    #[serde(default)]
    pub news: Vec<WorldNewsItem>,
}

/// One entry of the World News API `news` array.
#[derive(Debug, Deserialize)]
pub struct WorldNewsItem {
    pub title: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub summary: Option<String>,
}

impl From<WorldNewsItem> for ArticleRecord {
    fn from(n: WorldNewsItem) -> Self {
        ArticleRecord {
            title: n.title.unwrap_or_else(|| "No Title".to_string()),
            url: n.url.unwrap_or_else(|| "No URL".to_string()),
            body: resolve_body(n.text, n.summary),
        }
    }
}

/// Outcome of extracting facts for a single report entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStatus {
    Ok,
    SourceUnavailable,
    MalformedResponse,
}

/// The full report produced by one run.
///
/// Serialized as-is for the JSON output format.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// Report heading, `"News Report"` by default.
    pub title: String,
    /// When the report was assembled.
    pub generated_at: DateTime<Local>,
    /// One section per article source, in source order.
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(sections: Vec<ReportSection>) -> Self {
        Report {
            title: "News Report".to_string(),
            generated_at: Local::now(),
            sections,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// The entries coming from one article source.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSection {
    pub heading: String,
    pub entries: Vec<ReportEntry>,
}

/// Title, URL and extracted facts of one article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub title: String,
    pub url: String,
    /// Facts in the order the model listed them. Empty when extraction failed.
    pub facts: Vec<String>,
    pub status: ExtractionStatus,
}
