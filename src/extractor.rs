//! Fact extraction from article text.
//!
//! [`FactExtractor`] wraps a [`CompletionService`] with a fixed instruction
//! prompt, a line-based response parser and an [`ExtractionCache`]:
//!
//! 1. Cache hit: return the stored facts, no request.
//! 2. Otherwise build the prompt, ask the service, parse the numbered list.
//! 3. Successful parses are cached; failures are not, so the same text is
//!    asked again next time.

use crate::api::{CompletionError, CompletionService};
use crate::cache::ExtractionCache;
use crate::models::ExtractionStatus;
use tracing::{debug, info, instrument, warn};

/// Result of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Facts in the order the model listed them (possibly none).
    Facts(Vec<String>),
    /// The completion service was unreachable or refused the request.
    SourceUnavailable(String),
    /// The completion service answered with something unusable.
    MalformedResponse(String),
}

impl Extraction {
    /// The extracted facts; empty for failed extractions.
    pub fn facts(&self) -> &[String] {
        match self {
            Extraction::Facts(facts) => facts,
            _ => &[],
        }
    }

    pub fn status(&self) -> ExtractionStatus {
        match self {
            Extraction::Facts(_) => ExtractionStatus::Ok,
            Extraction::SourceUnavailable(_) => ExtractionStatus::SourceUnavailable,
            Extraction::MalformedResponse(_) => ExtractionStatus::MalformedResponse,
        }
    }
}

impl From<CompletionError> for Extraction {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Unavailable(msg) => Extraction::SourceUnavailable(msg),
            CompletionError::Malformed(msg) => Extraction::MalformedResponse(msg),
        }
    }
}

/// Build the instruction prompt with `text` embedded verbatim.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"
Extract specific factual statements from the following text, including all relevant names of companies and people.
Ensure that the facts are precise and contain specific details, without any narrative or value judgments.
Any predictions about future events based on the text should NOT be included.
Any conjecture or speculation should NOT be included.
Do your best to carefully read the entire text before generating the facts so nothing is left out.
Present the facts as a numbered list.

Text:
{text}

Factual Statements:
"#
    )
}

/// Split a completion response into facts.
///
/// Each line is trimmed of surrounding hyphens and whitespace; lines left
/// empty are dropped. Numbering such as `1.` is kept.
pub fn parse_facts(response: &str) -> Vec<String> {
    response
        .trim()
        .lines()
        .map(|line| line.trim_matches(|c: char| c == '-' || c.is_whitespace()))
        .filter(|fact| !fact.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts facts from article text through a completion service.
pub struct FactExtractor<S, C> {
    service: S,
    cache: C,
}

impl<S, C> FactExtractor<S, C>
where
    S: CompletionService,
    C: ExtractionCache,
{
    pub fn new(service: S, cache: C) -> Self {
        FactExtractor { service, cache }
    }

    #[cfg(test)]
    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Extract facts from `text`.
    ///
    /// Blank text short-circuits to an empty fact list without a request.
    #[instrument(level = "info", skip_all, fields(text_bytes = text.len()))]
    pub async fn extract(&self, text: &str) -> Extraction {
        if let Some(facts) = self.cache.get(text) {
            debug!(count = facts.len(), "Extraction cache hit");
            return Extraction::Facts(facts);
        }
        if text.trim().is_empty() {
            debug!("Empty article text; nothing to extract");
            return Extraction::Facts(Vec::new());
        }

        let prompt = build_prompt(text);
        match self.service.complete(&prompt).await {
            Ok(response) => {
                let facts = parse_facts(&response);
                info!(count = facts.len(), "Extracted facts");
                self.cache.put(text.to_string(), facts.clone());
                Extraction::Facts(facts)
            }
            Err(e) => {
                warn!(error = %e, "Error extracting facts");
                Extraction::from(e)
            }
        }
    }
}
