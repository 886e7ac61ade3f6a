//! CommentPulse Classifiers
//!
//! Sentiment classification for video-platform comments.
//!
//! Classification runs through a strategy chain:
//! - Remote models: hosted text-classification models, tried in order
//! - Lexical scorer: a local, deterministic lexicon scorer used as the fallback
//!
//! The [`Arbitrator`] memoizes labels per normalized text, and the
//! [`BatchOrchestrator`] drives it over many comments in paced chunks.

pub mod arbitrator;
pub mod batch;
pub mod cache;
pub mod classifier;
pub mod config;
pub mod interpret;
pub mod lexical;
pub mod lexicon;
pub mod normalize;
pub mod observability;
pub mod remote;

pub use arbitrator::Arbitrator;
pub use batch::{filter_by_label, BatchOrchestrator, ProgressFn};
pub use cache::{SentimentCache, DEFAULT_CACHE_CAPACITY};
pub use classifier::{Classifier, ClassifierTier};
pub use config::{load_config, BatchConfig, SentimentConfig, DEFAULT_MODELS};
pub use lexical::LexicalScorer;
pub use normalize::TextNormalizer;
pub use remote::{HttpInferenceBackend, ModelBackend, RemoteModelClassifier};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::arbitrator::Arbitrator;
    pub use crate::batch::{filter_by_label, BatchOrchestrator};
    pub use crate::cache::SentimentCache;
    pub use crate::classifier::{Classifier, ClassifierTier};
    pub use crate::config::SentimentConfig;
    pub use crate::lexical::LexicalScorer;
    pub use crate::remote::{HttpInferenceBackend, ModelBackend, RemoteModelClassifier};
}
