//! [NewsAPI](https://newsapi.org) `everything` endpoint client.
//!
//! Requests are restricted to articles published today in the configured
//! language:
//!
//! ```text
//! GET /v2/everything?from=2025-05-06&to=2025-05-06&language=en&pageSize=20&page=1&apiKey=...&q=apple
//! ```

use crate::config::Config;
use crate::models::{ArticleRecord, NewsApiResponse};
use crate::sources::{ArticleSource, today};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, instrument};
use url::Url;

/// Client for the NewsAPI search endpoint.
#[derive(Debug, Clone)]
pub struct NewsApiSource {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
    page_size: u32,
}

impl NewsApiSource {
    pub fn new(client: Client, config: &Config) -> Self {
        NewsApiSource {
            client,
            endpoint: config.settings.news_api_url.clone(),
            api_key: config.credentials.news_api_key.clone(),
            language: config.settings.language.clone(),
            page_size: config.settings.page_size,
        }
    }

    fn page_url(&self, query: Option<&str>, page: u32, date: &str) -> Result<Url, url::ParseError> {
        let mut params = vec![
            ("from", date.to_string()),
            ("to", date.to_string()),
            ("language", self.language.clone()),
            ("pageSize", self.page_size.to_string()),
            ("page", page.to_string()),
            ("apiKey", self.api_key.clone()),
        ];
        if let Some(q) = query {
            params.push(("q", q.to_string()));
        }
        Url::parse_with_params(&self.endpoint, &params)
    }
}

impl ArticleSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI Articles"
    }

    #[instrument(level = "info", skip(self), fields(source = "newsapi"))]
    async fn fetch_page(
        &self,
        query: Option<&str>,
        page: u32,
    ) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
        let url = self.page_url(query, page, &today())?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(format!(
                "NewsAPI returned {status}: {}",
                truncate_for_log(&body, 200)
            )
            .into());
        }
        debug!(response_preview = %truncate_for_log(&body, 300), "NewsAPI response");

        let payload: NewsApiResponse = serde_json::from_str(&body)?;
        Ok(payload.articles.into_iter().map(ArticleRecord::from).collect())
    }
}
