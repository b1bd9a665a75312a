//! News-search API clients that produce [`ArticleRecord`]s.
//!
//! Each source implements [`ArticleSource`]: it knows how to fetch a single
//! result page, and the shared [`ArticleSource::fetch`] fans out over all
//! requested pages.
//!
//! # Supported Sources
//!
//! | Source | Module | Auth | Notes |
//! |--------|--------|------|-------|
//! | NewsAPI | [`newsapi`] | `apiKey` query parameter | `everything` endpoint, today's articles |
//! | World News API | [`worldnews`] | `x-api-key` header | Optional second report section |
//!
//! # Failure Policy
//!
//! Fetching is best effort. A page that fails (network error, non-success
//! status, malformed payload) is logged and contributes nothing; the
//! remaining pages are still returned.

use crate::models::ArticleRecord;
use futures::future::join_all;
use std::error::Error;
use tracing::{debug, error, info};

pub mod newsapi;
pub mod worldnews;

pub use newsapi::NewsApiSource;
pub use worldnews::WorldNewsSource;

/// A paginated news-search API.
pub trait ArticleSource {
    /// Heading used for this source's report section.
    fn name(&self) -> &str;

    /// Fetch one result page (1-based).
    async fn fetch_page(
        &self,
        query: Option<&str>,
        page: u32,
    ) -> Result<Vec<ArticleRecord>, Box<dyn Error>>;

    /// Fetch pages `1..=page_count` and concatenate them in page order.
    ///
    /// All page requests are in flight at once, but results are joined in
    /// page order regardless of which response arrives first.
    async fn fetch(&self, query: Option<&str>, page_count: u32) -> Vec<ArticleRecord> {
        let pages = (1..=page_count).map(|page| async move {
            match self.fetch_page(query, page).await {
                Ok(articles) => {
                    debug!(source = self.name(), page, count = articles.len(), "Fetched page");
                    articles
                }
                Err(e) => {
                    error!(source = self.name(), page, error = %e, "Page fetch failed; skipping page");
                    Vec::new()
                }
            }
        });

        let articles: Vec<ArticleRecord> = join_all(pages).await.into_iter().flatten().collect();
        info!(
            source = self.name(),
            pages = page_count,
            count = articles.len(),
            "Fetched articles"
        );
        articles
    }
}

/// Today's local date in the `YYYY-MM-DD` form both APIs expect.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
