//! Arbitration between remote models and the lexical scorer
//!
//! Strategies are tried in order; the first one that produces an outcome wins.
//! When every remote strategy fails the lexical scorer answers, so a
//! classification call always resolves to a label.

use crate::cache::SentimentCache;
use crate::classifier::Classifier;
use crate::config::SentimentConfig;
use crate::lexical::LexicalScorer;
use crate::normalize::TextNormalizer;
use crate::observability::{CACHE_HITS, CACHE_MISSES, CLASSIFICATIONS, FALLBACKS};
use crate::remote::{HttpInferenceBackend, RemoteModelClassifier};
use commentpulse_core::{ClassificationOutcome, Error, OutcomeSource, Result, SentimentLabel};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Classifies single texts through the strategy chain, memoizing labels
pub struct Arbitrator {
    strategies: Vec<Arc<dyn Classifier>>,
    fallback: Arc<LexicalScorer>,
    normalizer: TextNormalizer,
    cache: Arc<SentimentCache>,
}

impl Arbitrator {
    /// Create an arbitrator over `strategies`, tried in order
    pub fn new(
        strategies: Vec<Arc<dyn Classifier>>,
        fallback: Arc<LexicalScorer>,
        cache: Arc<SentimentCache>,
    ) -> Result<Self> {
        Ok(Self {
            strategies,
            fallback,
            normalizer: TextNormalizer::new()?,
            cache,
        })
    }

    /// An arbitrator that never leaves the process
    pub fn lexical_only(cache: Arc<SentimentCache>) -> Result<Self> {
        Self::new(Vec::new(), Arc::new(LexicalScorer::new()?), cache)
    }

    /// Build the remote model chain described by `config`
    pub fn from_config(config: &SentimentConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::remote(format!("Failed to build HTTP client: {e}")))?;

        let strategies = config
            .models
            .iter()
            .map(|model| {
                let backend = HttpInferenceBackend::from_config(client.clone(), config, model);
                Arc::new(RemoteModelClassifier::new(
                    Arc::new(backend),
                    config.request_timeout(),
                )) as Arc<dyn Classifier>
            })
            .collect::<Vec<_>>();

        info!(
            models = strategies.len(),
            endpoint = %config.endpoint,
            cache_capacity = config.cache_capacity,
            "Sentiment arbitrator configured"
        );

        Self::new(
            strategies,
            Arc::new(LexicalScorer::new()?),
            Arc::new(SentimentCache::new(config.cache_capacity)),
        )
    }

    pub fn cache(&self) -> &Arc<SentimentCache> {
        &self.cache
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Names of the configured strategies, in trial order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Whether any strategy can give a different answer for the same text
    /// on a later run. Falling through such a chain is reported as an outage.
    pub fn has_remote_strategies(&self) -> bool {
        self.strategies
            .iter()
            .any(|s| !s.tier().is_deterministic())
    }

    /// Classify one text. Never fails: cache, then strategies, then lexicon.
    pub async fn classify(&self, text: &str) -> SentimentLabel {
        if let Some(label) = self.cache.get(text) {
            metrics::counter!(CACHE_HITS).increment(1);
            debug!(%label, "Sentiment cache hit");
            return label;
        }
        metrics::counter!(CACHE_MISSES).increment(1);

        let outcome = self.resolve(text).await;
        let source = match outcome.source {
            OutcomeSource::Model(_) => "model",
            OutcomeSource::Fallback => "fallback",
        };
        metrics::counter!(CLASSIFICATIONS, "label" => outcome.label.as_str(), "source" => source)
            .increment(1);

        self.cache.insert(text, outcome.label);
        outcome.label
    }

    /// Run the strategy chain without consulting or filling the cache
    pub async fn resolve(&self, text: &str) -> ClassificationOutcome {
        if text.trim().is_empty() {
            return self.fallback.outcome(text);
        }

        let prepared = self.normalizer.normalize(text);
        for strategy in &self.strategies {
            if let Some(outcome) = strategy.attempt(&prepared).await {
                debug!(
                    strategy = strategy.name(),
                    tier = ?strategy.tier(),
                    label = %outcome.label,
                    "Strategy answered"
                );
                return outcome;
            }
            debug!(strategy = strategy.name(), "Strategy gave no answer, trying next");
        }

        if self.has_remote_strategies() {
            warn!(
                attempted = self.strategies.len(),
                "All remote models failed, using lexical scorer"
            );
            metrics::counter!(FALLBACKS).increment(1);
        }

        self.fallback.outcome(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lexical_only_matches_scorer() {
        let arbitrator = Arbitrator::lexical_only(Arc::new(SentimentCache::default())).unwrap();
        let scorer = LexicalScorer::new().unwrap();

        for text in ["good", "not good", "Is this good?", "❤️❤️❤️", ""] {
            assert_eq!(arbitrator.classify(text).await, scorer.classify(text));
        }
    }

    #[tokio::test]
    async fn test_classification_is_cached() {
        let cache = Arc::new(SentimentCache::default());
        let arbitrator = Arbitrator::lexical_only(Arc::clone(&cache)).unwrap();

        let first = arbitrator.classify("Amazing tutorial").await;
        assert_eq!(cache.get("amazing tutorial"), Some(first));
        assert_eq!(arbitrator.classify("  amazing TUTORIAL ").await, first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_from_config_builds_chain_in_order() {
        let arbitrator = Arbitrator::from_config(&SentimentConfig::default()).unwrap();
        assert_eq!(
            arbitrator.strategy_names(),
            crate::config::DEFAULT_MODELS.to_vec()
        );
        assert_eq!(arbitrator.cache().capacity(), 10_000);
        assert!(arbitrator.has_remote_strategies());
    }

    #[tokio::test]
    async fn test_local_only_chain_is_not_remote() {
        let lexical_only = Arbitrator::lexical_only(Arc::new(SentimentCache::default())).unwrap();
        assert!(!lexical_only.has_remote_strategies());

        let local = Arc::new(LexicalScorer::with_name("local").unwrap()) as Arc<dyn Classifier>;
        let arbitrator = Arbitrator::new(
            vec![local],
            Arc::new(LexicalScorer::new().unwrap()),
            Arc::new(SentimentCache::default()),
        )
        .unwrap();
        assert!(!arbitrator.has_remote_strategies());
        assert_eq!(arbitrator.strategy_names(), vec!["local"]);
        assert_eq!(arbitrator.resolve("great").await.label, SentimentLabel::Positive);
    }
}
