//! Turns fetched articles into report sections.
//!
//! Every article yields exactly one entry, in input order, whether or not any
//! facts were found. Extraction requests run concurrently up to a fixed bound
//! and the results are put back in article order.

use crate::api::CompletionService;
use crate::cache::ExtractionCache;
use crate::extractor::{Extraction, FactExtractor};
use crate::models::{ArticleRecord, ReportEntry, ReportSection};
use futures::stream::{self, StreamExt};
use itertools::Itertools;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Builds report sections with a [`FactExtractor`].
pub struct ReportWriter<'a, S, C> {
    extractor: &'a FactExtractor<S, C>,
    concurrency: usize,
}

impl<'a, S, C> ReportWriter<'a, S, C>
where
    S: CompletionService,
    C: ExtractionCache,
{
    /// `concurrency` is clamped to at least 1 (strictly sequential).
    pub fn new(extractor: &'a FactExtractor<S, C>, concurrency: usize) -> Self {
        ReportWriter {
            extractor,
            concurrency: concurrency.max(1),
        }
    }

    /// Extract facts for every article and assemble one section.
    ///
    /// Identical bodies are extracted once; every article still gets its own
    /// entry.
    #[instrument(level = "info", skip_all, fields(%heading, articles = articles.len()))]
    pub async fn write(&self, heading: &str, articles: &[ArticleRecord]) -> ReportSection {
        let unique_bodies: Vec<&str> = articles.iter().map(|a| a.body.as_str()).unique().collect();
        info!(
            unique_bodies = unique_bodies.len(),
            concurrency = self.concurrency,
            "Starting fact extraction"
        );

        let extracted: HashMap<&str, Extraction> = stream::iter(unique_bodies)
            .map(|body| async move { (body, self.extractor.extract(body).await) })
            .buffered(self.concurrency)
            .collect()
            .await;

        let entries: Vec<ReportEntry> = articles
            .iter()
            .map(|article| {
                let extraction = &extracted[article.body.as_str()];
                info!(
                    title = %article.title,
                    facts = extraction.facts().len(),
                    status = ?extraction.status(),
                    "Processed article"
                );
                ReportEntry {
                    title: article.title.clone(),
                    url: article.url.clone(),
                    facts: extraction.facts().to_vec(),
                    status: extraction.status(),
                }
            })
            .collect();

        ReportSection {
            heading: heading.to_string(),
            entries,
        }
    }
}
