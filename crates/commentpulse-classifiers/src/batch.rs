//! Batch classification with chunked concurrency and fixed pacing
//!
//! Input is split into fixed-size chunks. Items within a chunk are classified
//! concurrently; the next chunk is only dispatched after every item of the
//! current one has resolved and the inter-chunk delay has elapsed.

use crate::arbitrator::Arbitrator;
use crate::config::BatchConfig;
use crate::observability::BATCH_CHUNKS;
use commentpulse_core::{Comment, SentimentLabel};
use futures::future::join_all;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Progress callback: `(items_completed, total_items)`
pub type ProgressFn<'a> = dyn Fn(usize, usize) + Send + Sync + 'a;

/// Drives an [`Arbitrator`] over many texts
pub struct BatchOrchestrator {
    arbitrator: Arc<Arbitrator>,
    chunk_size: usize,
    inter_chunk_delay: Duration,
}

impl BatchOrchestrator {
    /// Orchestrator with the default chunking (10 items, 1 second apart)
    pub fn new(arbitrator: Arc<Arbitrator>) -> Self {
        Self::from_config(arbitrator, &BatchConfig::default())
    }

    pub fn from_config(arbitrator: Arc<Arbitrator>, config: &BatchConfig) -> Self {
        Self {
            arbitrator,
            chunk_size: config.chunk_size.max(1),
            inter_chunk_delay: config.inter_chunk_delay(),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_inter_chunk_delay(mut self, delay: Duration) -> Self {
        self.inter_chunk_delay = delay;
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn arbitrator(&self) -> &Arc<Arbitrator> {
        &self.arbitrator
    }

    /// Classify `texts`, returning one label per input in input order.
    ///
    /// `on_progress` is called once per chunk with cumulative counts. A
    /// panicking callback is logged and otherwise ignored.
    pub async fn classify_batch<S>(
        &self,
        texts: &[S],
        on_progress: Option<&ProgressFn<'_>>,
    ) -> Vec<SentimentLabel>
    where
        S: AsRef<str> + Sync,
    {
        let total = texts.len();
        let chunks = total.div_ceil(self.chunk_size);
        let mut labels = Vec::with_capacity(total);

        for (index, chunk) in texts.chunks(self.chunk_size).enumerate() {
            metrics::counter!(BATCH_CHUNKS).increment(1);

            let chunk_labels = join_all(
                chunk
                    .iter()
                    .map(|text| self.arbitrator.classify(text.as_ref())),
            )
            .await;
            labels.extend(chunk_labels);

            info!(
                chunk = index + 1,
                chunks,
                completed = labels.len(),
                total,
                "Classified chunk"
            );

            if let Some(callback) = on_progress {
                report_progress(callback, labels.len(), total);
            }

            if labels.len() < total && !self.inter_chunk_delay.is_zero() {
                tokio::time::sleep(self.inter_chunk_delay).await;
            }
        }

        labels
    }

    /// Classify the plain text of each comment, in input order
    pub async fn classify_comments(
        &self,
        comments: &[Comment],
        on_progress: Option<&ProgressFn<'_>>,
    ) -> Vec<SentimentLabel> {
        let normalizer = self.arbitrator.normalizer();
        let texts: Vec<String> = comments
            .iter()
            .map(|comment| normalizer.strip_html(&comment.text))
            .collect();

        self.classify_batch(&texts, on_progress).await
    }
}

fn report_progress(callback: &ProgressFn<'_>, completed: usize, total: usize) {
    if catch_unwind(AssertUnwindSafe(|| callback(completed, total))).is_err() {
        warn!(completed, total, "Progress callback panicked; continuing batch");
    }
}

/// Comments whose parallel label equals `filter`; every comment when `None`
pub fn filter_by_label<'a>(
    comments: &'a [Comment],
    labels: &[SentimentLabel],
    filter: Option<SentimentLabel>,
) -> Vec<&'a Comment> {
    comments
        .iter()
        .zip(labels)
        .filter(|(_, label)| filter.map_or(true, |wanted| **label == wanted))
        .map(|(comment, _)| comment)
        .collect()
}
