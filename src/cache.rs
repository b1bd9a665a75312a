//! Exact-text memoization of extraction results.
//!
//! The extractor only needs two operations, so the cache is a trait and the
//! in-memory map is just one implementation. Keys are the full article text;
//! no normalization is applied.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage for fact lists keyed by the exact text they were extracted from.
///
/// Methods take `&self` so one cache can be shared by concurrently running
/// extractions.
pub trait ExtractionCache {
    fn get(&self, text: &str) -> Option<Vec<String>>;
    fn put(&self, text: String, facts: Vec<String>);
}

/// Unbounded process-lifetime cache. Never evicts, never persists.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, Vec<String>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl ExtractionCache for InMemoryCache {
    fn get(&self, text: &str) -> Option<Vec<String>> {
        // A poisoned lock only means a panicking writer; the map is still usable.
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(text).cloned()
    }

    fn put(&self, text: String, facts: Vec<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(text, facts);
    }
}
