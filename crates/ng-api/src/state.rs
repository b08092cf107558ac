//! Application state management

use ng_core::config::AppConfig;
use ng_extractor::{EntityTagger, Extractor, GazetteerTagger};
use ng_graph::StatementExporter;
use ng_sources::{DigestStore, FeedStore, PipelineRunner};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Completed extractions
    pub extraction_count: AtomicU64,
    /// Text-to-triples pipeline over the shared tagger
    pub extractor: Extractor,
    /// Graph-creation statement exporter
    pub exporter: StatementExporter,
    /// Feed source store; the write lock serializes file updates
    pub feeds: RwLock<FeedStore>,
    /// Digest artifacts written by the batch pipeline
    pub digests: DigestStore,
    /// External batch pipeline
    pub pipeline: PipelineRunner,
    /// Held while a pipeline run is in flight
    pipeline_lock: Mutex<()>,
}

impl AppState {
    /// Create state from config, loading the configured gazetteer
    pub fn new(config: AppConfig) -> ng_core::Result<Self> {
        let tagger = match &config.extraction.gazetteer_path {
            Some(path) => GazetteerTagger::from_yaml_file(path)?,
            None => GazetteerTagger::new(),
        };
        info!(terms = tagger.term_count(), "entity tagger ready");

        Ok(Self::with_tagger(config, Arc::new(tagger)))
    }

    /// Create state around an existing tagger
    pub fn with_tagger(config: AppConfig, tagger: Arc<dyn EntityTagger>) -> Self {
        Self {
            extractor: Extractor::from_config(tagger, &config.extraction),
            exporter: StatementExporter::from_config(&config.extraction),
            feeds: RwLock::new(FeedStore::new(config.feeds.path.clone())),
            digests: DigestStore::from_config(&config.digest),
            pipeline: PipelineRunner::from_config(&config.pipeline),
            pipeline_lock: Mutex::new(()),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            extraction_count: AtomicU64::new(0),
            config,
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    pub fn record_extraction(&self) {
        self.extraction_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get_extraction_count(&self) -> u64 {
        self.extraction_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Claim the pipeline slot; `None` when a run is already in progress
    pub fn try_begin_pipeline(&self) -> Option<MutexGuard<'_, ()>> {
        self.pipeline_lock.try_lock().ok()
    }
}
