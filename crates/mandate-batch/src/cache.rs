//! Least-recently-used cache of extraction results

use mandate_extractor::{ExtractionResult, ProcessingOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Cache key for a document/options pair
///
/// Combines the document length, the first 50 characters of its text, and
/// the serialized options, with whitespace runs collapsed to underscores.
/// Distinct options never share an entry.
pub(crate) fn cache_key(
    text: &str,
    options: &ProcessingOptions,
) -> Result<String, serde_json::Error> {
    let options_json = serde_json::to_string(options)?;
    let prefix: String = text.chars().take(50).collect();
    let raw = format!("{}_{}_{}", text.len(), prefix, options_json);
    Ok(WHITESPACE.replace_all(&raw, "_").into_owned())
}

/// Counters describing cache effectiveness
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,

    /// Lookups that fell through to processing
    pub misses: u64,

    /// Entries currently held
    pub size: usize,

    /// Entry capacity; zero means the cache is disabled
    pub max_size: usize,

    /// `hits / (hits + misses)`, 0.0 before any lookup
    pub hit_rate: f64,
}

#[derive(Debug)]
struct CacheEntry {
    result: ExtractionResult,
    last_used: u64,
}

/// Least-recently-used cache keyed by document and options
///
/// A capacity of zero disables the cache entirely: lookups miss without
/// counting and inserts are dropped. Recency uses a monotonic counter
/// rather than wall-clock time, so two operations never tie.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    max_size: usize,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    /// Create a cache holding at most `max_size` results
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Create a cache that ignores all operations
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether lookups and inserts do anything
    pub fn is_enabled(&self) -> bool {
        self.max_size > 0
    }

    /// Enable the cache with a fresh capacity, dropping entries and counters
    pub fn enable(&mut self, max_size: usize) {
        self.max_size = max_size;
        self.clear();
    }

    /// Drop all entries and reset the hit/miss counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.clock = 0;
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no results
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a cached result, refreshing its recency on a hit
    pub fn get(&mut self, key: &str) -> Option<ExtractionResult> {
        if !self.is_enabled() {
            return None;
        }
        self.clock += 1;
        match self.entries.get_mut(key) {
            Some(entry) => {
                self.hits += 1;
                entry.last_used = self.clock;
                Some(entry.result.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a result, evicting the least recently used entry when full
    pub fn insert(&mut self, key: String, result: ExtractionResult) {
        if !self.is_enabled() {
            return;
        }
        self.clock += 1;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                result,
                last_used: self.clock,
            },
        );
    }

    /// Current effectiveness counters
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
            max_size: self.max_size,
            hit_rate,
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            debug!("Evicting least recently used cache entry");
            self.entries.remove(&key);
        }
    }
}
