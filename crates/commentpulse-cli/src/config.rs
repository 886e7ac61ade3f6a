//! CLI configuration: YAML file plus command-line overrides

use commentpulse_classifiers::SentimentConfig;
use std::path::Path;
use tracing::debug;

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_token: Option<String>,
    pub chunk_size: Option<usize>,
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
}

/// Load configuration from file and CLI overrides
pub fn load(config_path: &str, overrides: &Overrides) -> anyhow::Result<SentimentConfig> {
    // Try to load from file, or use defaults
    let mut config = if Path::new(config_path).exists() {
        debug!(path = config_path, "Loading sentiment config");
        commentpulse_classifiers::load_config(config_path)?
    } else {
        debug!(path = config_path, "No config file, using defaults");
        SentimentConfig::default()
    };

    apply_overrides(&mut config, overrides);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut SentimentConfig, overrides: &Overrides) {
    if let Some(token) = &overrides.api_token {
        config.api_token = Some(token.clone());
    }

    if let Some(chunk_size) = overrides.chunk_size {
        config.batch.chunk_size = chunk_size;
    }

    if let Some(delay_ms) = overrides.delay_ms {
        config.batch.inter_chunk_delay_ms = delay_ms;
    }

    if let Some(timeout_ms) = overrides.timeout_ms {
        config.request_timeout_ms = timeout_ms;
    }
}
