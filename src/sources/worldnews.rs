//! [World News API](https://worldnewsapi.com) `search-news` client.
//!
//! Used for the optional second report section. Pages map onto the API's
//! `offset`/`number` window and the key travels in the `x-api-key` header.

use crate::config::Config;
use crate::models::{ArticleRecord, WorldNewsResponse};
use crate::sources::{ArticleSource, today};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Clone)]
pub struct WorldNewsSource {
    client: Client,
    endpoint: String,
    api_key: String,
    language: String,
    source_country: String,
    page_size: u32,
}

impl WorldNewsSource {
    /// Returns `None` when no World News API key is configured.
    pub fn new(client: Client, config: &Config) -> Option<Self> {
        let api_key = config.credentials.world_news_api_key.clone()?;
        Some(WorldNewsSource {
            client,
            endpoint: config.settings.world_news_url.clone(),
            api_key,
            language: config.settings.language.clone(),
            source_country: config.settings.source_country.clone(),
            page_size: config.settings.page_size,
        })
    }

    fn page_url(&self, query: Option<&str>, page: u32, date: &str) -> Result<Url, url::ParseError> {
        let offset = page.saturating_sub(1) * self.page_size;
        let mut params = vec![
            ("source-country", self.source_country.clone()),
            ("language", self.language.clone()),
            ("date", date.to_string()),
            ("offset", offset.to_string()),
            ("number", self.page_size.to_string()),
        ];
        if let Some(q) = query {
            params.push(("text", q.to_string()));
        }
        Url::parse_with_params(&self.endpoint, &params)
    }
}

impl ArticleSource for WorldNewsSource {
    fn name(&self) -> &str {
        "World News API Top News"
    }

    #[instrument(level = "info", skip(self), fields(source = "worldnews"))]
    async fn fetch_page(
        &self,
        query: Option<&str>,
        page: u32,
    ) -> Result<Vec<ArticleRecord>, Box<dyn Error>> {
        let url = self.page_url(query, page, &today())?;
        let response = self
            .client
            .get(url)
            .header("x-api-key", &self.api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(format!(
                "World News API returned {status}: {}",
                truncate_for_log(&body, 200)
            )
            .into());
        }
        debug!(response_preview = %truncate_for_log(&body, 300), "World News API response");

        let payload: WorldNewsResponse = serde_json::from_str(&body)?;
        Ok(payload.news.into_iter().map(ArticleRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Credentials, Settings};
    use crate::test_support::{StubResponse, StubServer, client};

    fn config_for(base_url: &str, key: Option<&str>) -> Config {
        Config {
            credentials: Credentials {
                news_api_key: "news-key".to_string(),
                completion_api_key: "sk-test".to_string(),
                world_news_api_key: key.map(str::to_string),
            },
            settings: Settings {
                world_news_url: format!("{base_url}/search-news"),
                page_size: 10,
                ..Settings::default()
            },
        }
    }

    #[test]
    fn test_source_requires_key() {
        assert!(WorldNewsSource::new(client(), &config_for("http://x", None)).is_none());
    }

    #[test]
    fn test_page_url_offsets() {
        let source =
            WorldNewsSource::new(client(), &config_for("http://x", Some("wk"))).unwrap();
        let url = source.page_url(Some("ai"), 3, "2025-05-06").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |k: &str| pairs.iter().find(|(n, _)| n == k).map(|(_, v)| v.as_str());

        assert_eq!(get("offset"), Some("20"));
        assert_eq!(get("number"), Some("10"));
        assert_eq!(get("source-country"), Some("us"));
        assert_eq!(get("date"), Some("2025-05-06"));
        assert_eq!(get("text"), Some("ai"));
    }

    #[tokio::test]
    async fn test_fetch_sends_key_header_and_maps_items() {
        let server = StubServer::start(|_| {
            StubResponse::json(
                200,
                r#"{"offset":0,"number":10,"available":1,"news":[
                    {"id":1,"title":"Top","url":"https://w.example/top","text":null,"summary":"Summary text"}
                ]}"#,
            )
        })
        .await;

        let source =
            WorldNewsSource::new(client(), &config_for(&server.base_url, Some("wk"))).unwrap();
        let articles = source.fetch(None, 1).await;

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Top");
        assert_eq!(articles[0].body, "Summary text");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("x-api-key"), Some("wk"));
        assert!(requests[0].target.starts_with("/search-news?"));
    }

    #[tokio::test]
    async fn test_fetch_error_status_yields_nothing() {
        let server = StubServer::start(|_| StubResponse::json(402, r#"{"message":"quota"}"#)).await;
        let source =
            WorldNewsSource::new(client(), &config_for(&server.base_url, Some("wk"))).unwrap();
        assert!(source.fetch(None, 1).await.is_empty());
    }
}
