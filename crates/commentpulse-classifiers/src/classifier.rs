//! Classifier trait and common types

use async_trait::async_trait;
use commentpulse_core::ClassificationOutcome;

/// A single sentiment strategy in the arbitration chain.
///
/// `attempt` returns `None` when the strategy could not produce a usable
/// answer (network failure, non-success status, unparseable payload). It never
/// returns an error: callers move on to the next strategy instead.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Try to classify the given text
    async fn attempt(&self, text: &str) -> Option<ClassificationOutcome>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Get the tier (determinism category)
    fn tier(&self) -> ClassifierTier;
}

/// Classifier tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierTier {
    /// Pure and deterministic; identical text always yields the same label
    Local,
    /// Backed by a remote model whose answers may drift between deployments
    Remote,
}

impl ClassifierTier {
    /// Whether cached labels from this tier are exact rather than a cost optimization
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::Local)
    }
}
