//! Core types for CommentPulse

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical three-way sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// All labels in reporting order
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            other => Err(crate::Error::config(format!(
                "unknown sentiment label '{other}' (expected positive, negative or neutral)"
            ))),
        }
    }
}

/// A top-level comment as returned by the video-platform client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Platform comment ID
    pub id: String,

    /// Display name of the author
    pub author: String,

    /// Avatar URL of the author
    #[serde(default)]
    pub author_profile_image_url: String,

    /// Raw comment text (may carry HTML markup)
    pub text: String,

    /// Number of likes on the comment
    #[serde(default)]
    pub like_count: u64,

    /// Publication timestamp (RFC 3339, as delivered by the platform)
    #[serde(default)]
    pub published_at: String,
}

impl Comment {
    /// Create a comment with only the fields sentiment scoring needs
    pub fn new(id: impl Into<String>, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            author_profile_image_url: String::new(),
            text: text.into(),
            like_count: 0,
            published_at: String::new(),
        }
    }
}

/// One `{label, score}` pair reported by a remote text classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Vendor-specific label ("POSITIVE", "LABEL_2", "neu", ...)
    pub label: String,

    /// Probability-like confidence in [0, 1]
    pub score: f32,
}

impl Candidate {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Which strategy produced a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeSource {
    /// A remote model, by name
    Model(String),
    /// The rule-based lexical scorer
    Fallback,
}

impl fmt::Display for OutcomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model(name) => f.write_str(name),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Ephemeral result of a single classification attempt.
///
/// Only `label` is meant to outlive the call; confidence and source exist for
/// logging and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationOutcome {
    pub label: SentimentLabel,

    /// Confidence in [0, 1]
    pub confidence: f32,

    pub source: OutcomeSource,
}

impl ClassificationOutcome {
    /// Outcome produced by a named remote model
    pub fn from_model(label: SentimentLabel, confidence: f32, model: impl Into<String>) -> Self {
        Self {
            label,
            confidence,
            source: OutcomeSource::Model(model.into()),
        }
    }

    /// Outcome produced by the lexical scorer
    pub fn fallback(label: SentimentLabel, confidence: f32) -> Self {
        Self {
            label,
            confidence,
            source: OutcomeSource::Fallback,
        }
    }
}

/// Label counts over a set of comments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentSummary {
    /// Count labels
    pub fn from_labels(labels: &[SentimentLabel]) -> Self {
        let mut summary = Self::default();
        for label in labels {
            summary.record(*label);
        }
        summary
    }

    /// Add one label to the counts
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of `label` in percent; 0.0 when nothing was counted
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(label) as f64 / total as f64 * 100.0
    }

    /// `(label, count, "xx.xx%")` rows in Positive, Neutral, Negative order
    pub fn rows(&self) -> Vec<(SentimentLabel, usize, String)> {
        SentimentLabel::ALL
            .iter()
            .map(|label| {
                (
                    *label,
                    self.count(*label),
                    format!("{:.2}%", self.percentage(*label)),
                )
            })
            .collect()
    }
}
