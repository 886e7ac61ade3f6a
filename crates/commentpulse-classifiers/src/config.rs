//! Configuration for remote models, caching and batching

use crate::cache::DEFAULT_CACHE_CAPACITY;
use commentpulse_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Primary, secondary and tertiary sentiment models, in trial order
pub const DEFAULT_MODELS: [&str; 3] = [
    "cardiffnlp/twitter-roberta-base-sentiment-latest",
    "finiteautomata/bertweet-base-sentiment-analysis",
    "distilbert-base-uncased-finetuned-sst-2-english",
];

/// Sentiment subsystem configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Base URL of the inference service; the model name is appended
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Remote models tried in order before falling back to the lexicon
    #[serde(default = "default_models")]
    pub models: Vec<String>,

    /// Bearer token for the inference service
    #[serde(default)]
    pub api_token: Option<String>,

    /// Ask the service to block until a cold model has loaded
    #[serde(default = "default_true")]
    pub wait_for_model: bool,

    /// Per-call timeout; an expired call counts as a failed attempt
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Maximum number of memoized labels
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Batch orchestration settings
    #[serde(default)]
    pub batch: BatchConfig,
}

/// Chunking and pacing for batch classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Items classified concurrently per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Pause between consecutive chunks
    #[serde(default = "default_inter_chunk_delay_ms")]
    pub inter_chunk_delay_ms: u64,
}

impl SentimentConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Invalid sentiment config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint must not be empty"));
        }
        if self.cache_capacity == 0 {
            return Err(Error::config("cache_capacity must be greater than zero"));
        }
        if self.batch.chunk_size == 0 {
            return Err(Error::config("batch.chunk_size must be greater than zero"));
        }
        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(Error::config("model names must not be empty"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            models: default_models(),
            api_token: None,
            wait_for_model: true,
            request_timeout_ms: default_request_timeout_ms(),
            cache_capacity: default_cache_capacity(),
            batch: BatchConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn inter_chunk_delay(&self) -> Duration {
        Duration::from_millis(self.inter_chunk_delay_ms)
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            inter_chunk_delay_ms: default_inter_chunk_delay_ms(),
        }
    }
}

/// Load and validate a config file, with a contextual error
pub fn load_config(path: impl AsRef<Path>) -> Result<SentimentConfig> {
    SentimentConfig::from_file(path.as_ref())
        .map_err(|e| Error::config(format!("Failed to load sentiment config: {e}")))
}

fn default_endpoint() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_models() -> Vec<String> {
    DEFAULT_MODELS.iter().map(|m| m.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_chunk_size() -> usize {
    10
}

fn default_inter_chunk_delay_ms() -> u64 {
    1_000
}
