//! CommentPulse Core
//!
//! Core types and utilities shared across CommentPulse components.
//!
//! This crate provides:
//! - Comment records as supplied by the video-platform client
//! - The canonical three-way sentiment label and per-call outcomes
//! - Aggregated sentiment summaries
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Candidate, ClassificationOutcome, Comment, OutcomeSource, SentimentLabel, SentimentSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{ClassificationOutcome, Comment, SentimentLabel, SentimentSummary};
}
