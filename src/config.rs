//! Run configuration: credentials plus tunable settings.
//!
//! Credentials come from the CLI (or the matching environment variables) and
//! are validated once at startup. Everything else has a default and can be
//! overridden from an optional YAML settings file:
//!
//! ```yaml
//! model: gpt-4o
//! temperature: 0.5
//! language: en
//! page_size: 20
//! ```
//!
//! The resulting [`Config`] is handed to each component's constructor.

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument};

/// Tunable, non-secret settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Completion model identifier.
    pub model: String,
    /// Sampling temperature sent with every completion request.
    pub temperature: f32,
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`).
    pub completion_base_url: String,
    /// NewsAPI `everything` endpoint.
    pub news_api_url: String,
    /// World News API `search-news` endpoint.
    pub world_news_url: String,
    /// Language filter for both news APIs.
    pub language: String,
    /// Articles requested per page.
    pub page_size: u32,
    /// Country filter for the World News API.
    pub source_country: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.0,
            completion_base_url: "https://api.openai.com/v1".to_string(),
            news_api_url: "https://newsapi.org/v2/everything".to_string(),
            world_news_url: "https://api.worldnewsapi.com/search-news".to_string(),
            language: "en".to_string(),
            page_size: 20,
            source_country: "us".to_string(),
        }
    }
}

/// Validated API keys.
#[derive(Clone)]
pub struct Credentials {
    pub news_api_key: String,
    pub completion_api_key: String,
    /// Present only when the World News section is enabled.
    pub world_news_api_key: Option<String>,
}

// Keys never reach the logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("news_api_key", &"<redacted>")
            .field("completion_api_key", &"<redacted>")
            .field(
                "world_news_api_key",
                &self.world_news_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Everything a run needs, built once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Config {
    /// Build the configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if a required credential is missing or still a
    /// placeholder, or if the settings file cannot be read or parsed.
    #[instrument(level = "info", skip_all)]
    pub fn from_cli(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let news_api_key = require_key("NEWS_API_KEY", cli.news_api_key.as_deref())?;
        let completion_api_key = require_key("OPENAI_API_KEY", cli.openai_api_key.as_deref())?;
        let world_news_api_key = if cli.world_news {
            Some(require_key(
                "WORLD_NEWS_API_KEY",
                cli.world_news_api_key.as_deref(),
            )?)
        } else {
            None
        };

        let settings = match &cli.config {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };
        info!(model = %settings.model, temperature = settings.temperature, "Configuration loaded");

        Ok(Config {
            credentials: Credentials {
                news_api_key,
                completion_api_key,
                world_news_api_key,
            },
            settings,
        })
    }
}

/// Read a YAML settings file; absent keys keep their defaults.
pub fn load_settings(path: &str) -> Result<Settings, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read settings file {path}: {e}"))?;
    let settings = parse_settings(&raw).map_err(|e| format!("invalid settings file {path}: {e}"))?;
    debug!(%path, ?settings, "Loaded settings file");
    Ok(settings)
}

fn parse_settings(raw: &str) -> Result<Settings, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(Settings::default());
    }
    // A null document (`~`) means "no overrides".
    let settings: Option<Settings> = serde_yaml::from_str(raw)?;
    Ok(settings.unwrap_or_default())
}

/// Unset, blank, `EMPTY` or `YOUR_...` values are placeholders.
pub fn is_placeholder(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v.eq_ignore_ascii_case("EMPTY") || v.to_ascii_uppercase().starts_with("YOUR_")
}

fn require_key(name: &str, value: Option<&str>) -> Result<String, Box<dyn Error>> {
    match value {
        Some(v) if !is_placeholder(v) => Ok(v.trim().to_string()),
        _ => Err(format!(
            "Please set your {name} environment variable (or pass it on the command line) with your actual key."
        )
        .into()),
    }
}
