//! Batch processing with per-document failure isolation

use crate::cache::{cache_key, CacheStats, ResultCache};
use crate::error::BatchError;
use mandate_extractor::{ExtractionResult, PipelineConfig, ProcessingOptions, Processor};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Outcome of one document in a batch
///
/// Failures stay in their slot instead of aborting the batch, so callers
/// can always pair outcomes with inputs by position.
#[derive(Debug)]
pub struct BatchItem {
    /// Position of the document in the submitted batch
    pub index: usize,

    /// Extraction outcome for that document
    pub outcome: Result<ExtractionResult, BatchError>,
}

/// Runs the extraction pipeline over many documents
///
/// Wraps a [`Processor`] with result caching, per-document failure
/// isolation, bounded-concurrency execution, and streaming with
/// incremental combined results. Clones share one cache.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    processor: Processor,
    cache: Arc<Mutex<ResultCache>>,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl BatchProcessor {
    /// Create a batch processor with the given pipeline configuration
    ///
    /// The result cache starts disabled; call
    /// [`enable_cache`](Self::enable_cache) to turn it on.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            processor: Processor::new(config),
            cache: Arc::new(Mutex::new(ResultCache::disabled())),
        }
    }

    /// Enable result caching with the given capacity, dropping prior state
    pub fn enable_cache(&self, max_size: usize) -> Result<(), BatchError> {
        info!("Result cache enabled with capacity {}", max_size);
        self.lock_cache()?.enable(max_size);
        Ok(())
    }

    /// Drop all cached results and reset the hit/miss counters
    pub fn clear_cache(&self) -> Result<(), BatchError> {
        self.lock_cache()?.clear();
        Ok(())
    }

    /// Current cache effectiveness counters
    pub fn cache_stats(&self) -> Result<CacheStats, BatchError> {
        Ok(self.lock_cache()?.stats())
    }

    /// Process documents sequentially, one outcome per document
    ///
    /// Output order always matches input order, and a document that fails
    /// leaves an error in its slot rather than aborting the rest.
    pub fn process_batch(
        &self,
        documents: &[String],
        options: &ProcessingOptions,
    ) -> Vec<BatchItem> {
        info!("Processing batch of {} documents", documents.len());

        documents
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let outcome = self.process_one(text, options);
                if let Err(e) = &outcome {
                    warn!("Document {} failed: {}", index + 1, e);
                }
                BatchItem { index, outcome }
            })
            .collect()
    }

    /// Process documents concurrently with at most `concurrency` in flight
    ///
    /// Workers share the result cache, and output order matches input
    /// order regardless of completion order. A worker that panics leaves a
    /// [`BatchError::Worker`] in its slot. A `concurrency` of zero is
    /// treated as one.
    pub async fn process_batch_async(
        &self,
        documents: Vec<String>,
        options: &ProcessingOptions,
        concurrency: usize,
    ) -> Vec<BatchItem> {
        let permits = concurrency.max(1);
        info!(
            "Processing batch of {} documents with concurrency {}",
            documents.len(),
            permits
        );

        let semaphore = Arc::new(Semaphore::new(permits));
        let mut handles = Vec::with_capacity(documents.len());

        for (index, text) in documents.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let worker = self.clone();
            let options = options.clone();
            handles.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| BatchError::Worker {
                        index,
                        message: e.to_string(),
                    })?;
                worker.process_one(&text, &options)
            }));
        }

        // Awaiting handles in spawn order keeps output aligned with input
        let mut items = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(BatchError::Worker {
                    index,
                    message: e.to_string(),
                }),
            };
            if let Err(e) = &outcome {
                warn!("Document {} failed: {}", index + 1, e);
            }
            items.push(BatchItem { index, outcome });
        }
        items
    }

    pub(crate) fn process_one(
        &self,
        text: &str,
        options: &ProcessingOptions,
    ) -> Result<ExtractionResult, BatchError> {
        let key = cache_key(text, options)?;

        if let Some(result) = self.lock_cache()?.get(&key) {
            debug!("Cache hit for {} char document", text.len());
            return Ok(result);
        }

        let result = self.processor.extract(text, options)?;
        self.lock_cache()?.insert(key, result.clone());
        Ok(result)
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, ResultCache>, BatchError> {
        self.cache
            .lock()
            .map_err(|e| BatchError::Cache(e.to_string()))
    }
}
