//! Metric names emitted by the sentiment subsystem
//!
//! Only the `metrics` facade is used here; installing an exporter is left to
//! the embedding application.

pub const CACHE_HITS: &str = "commentpulse_cache_hits_total";
pub const CACHE_MISSES: &str = "commentpulse_cache_misses_total";
pub const MODEL_FAILURES: &str = "commentpulse_model_failures_total";
pub const FALLBACKS: &str = "commentpulse_fallbacks_total";
pub const CLASSIFICATIONS: &str = "commentpulse_classifications_total";
pub const BATCH_CHUNKS: &str = "commentpulse_batch_chunks_total";
pub const REMOTE_LATENCY: &str = "commentpulse_remote_latency_us";

/// Register descriptions for every metric with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(CACHE_HITS, "Classifications answered from the sentiment cache");
    metrics::describe_counter!(CACHE_MISSES, "Classifications that had to be computed");
    metrics::describe_counter!(
        MODEL_FAILURES,
        "Failed remote model attempts (error, non-success status, timeout, empty payload)"
    );
    metrics::describe_counter!(
        FALLBACKS,
        "Classifications resolved by the lexical scorer after every remote model failed"
    );
    metrics::describe_counter!(CLASSIFICATIONS, "Resolved classifications by label and source");
    metrics::describe_counter!(BATCH_CHUNKS, "Chunks dispatched by the batch orchestrator");
    metrics::describe_histogram!(
        REMOTE_LATENCY,
        metrics::Unit::Microseconds,
        "Remote model call latency in microseconds"
    );
}
