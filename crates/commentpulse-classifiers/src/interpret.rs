//! Interpretation of remote model candidates
//!
//! Remote models report a list of `{label, score}` candidates in their own
//! label vocabulary. This module maps vendor labels onto the canonical
//! three-way label and decides what to do with unsure answers.

use crate::lexicon::ACKNOWLEDGMENTS;
use commentpulse_core::{Candidate, SentimentLabel};
use tracing::debug;

/// Below this top confidence the low-confidence interpreter takes over
pub const CONFIDENCE_FLOOR: f32 = 0.4;

/// Top-two score gap under which the model is considered undecided
pub const MIN_MARGIN: f32 = 0.1;

/// Highest-to-lowest spread under which an unsure answer is Neutral
pub const MIN_SPREAD: f32 = 0.2;

/// Questions shorter than this are treated as information requests
const SHORT_QUESTION_CHARS: usize = 100;

/// Map a vendor label onto the canonical label.
///
/// Matching is case-insensitive on the substrings "POS", "NEG" and "NEU", with
/// the positional `LABEL_0/1/2` encoding of three-class models as a second
/// pass. Returns `None` for labels outside the known vocabulary.
pub fn canonical_label(raw: &str) -> Option<SentimentLabel> {
    let label = raw.trim().to_ascii_uppercase();

    if label.contains("POS") {
        Some(SentimentLabel::Positive)
    } else if label.contains("NEG") {
        Some(SentimentLabel::Negative)
    } else if label.contains("NEU") {
        Some(SentimentLabel::Neutral)
    } else {
        match label.as_str() {
            "LABEL_2" => Some(SentimentLabel::Positive),
            "LABEL_1" => Some(SentimentLabel::Neutral),
            "LABEL_0" => Some(SentimentLabel::Negative),
            _ => None,
        }
    }
}

/// Canonical label, with unknown vendor labels read as Neutral
pub fn label_or_neutral(raw: &str) -> SentimentLabel {
    canonical_label(raw).unwrap_or_else(|| {
        debug!(label = raw, "Unknown model label, treating as neutral");
        SentimentLabel::Neutral
    })
}

/// Sort candidates by descending score
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// Turn a model response into a label.
///
/// `text` is the text that was sent to the model; `ranked` must be sorted by
/// descending score and non-empty. Returns the label and the top confidence.
pub fn interpret(text: &str, ranked: &[Candidate]) -> Option<(SentimentLabel, f32)> {
    let top = ranked.first()?;

    if top.score < CONFIDENCE_FLOOR {
        return Some((interpret_low_confidence(text, ranked), top.score));
    }

    if let Some(second) = ranked.get(1) {
        if top.score - second.score < MIN_MARGIN {
            return Some((SentimentLabel::Neutral, top.score));
        }
    }

    Some((label_or_neutral(&top.label), top.score))
}

/// Heuristics for answers below [`CONFIDENCE_FLOOR`]
pub fn interpret_low_confidence(text: &str, ranked: &[Candidate]) -> SentimentLabel {
    if text.contains('?') && text.chars().count() < SHORT_QUESTION_CHARS {
        return SentimentLabel::Neutral;
    }

    let lowered = text.trim().to_lowercase();
    if ACKNOWLEDGMENTS.contains(&lowered.as_str()) {
        return SentimentLabel::Neutral;
    }

    if ranked.len() >= 2 {
        let max = ranked.iter().map(|c| c.score).fold(f32::MIN, f32::max);
        let min = ranked.iter().map(|c| c.score).fold(f32::MAX, f32::min);
        if max - min < MIN_SPREAD {
            return SentimentLabel::Neutral;
        }
    }

    ranked
        .first()
        .map_or(SentimentLabel::Neutral, |top| label_or_neutral(&top.label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(label: &str, score: f32) -> Candidate {
        Candidate::new(label, score)
    }

    #[test]
    fn test_canonical_label_vocabularies() {
        assert_eq!(canonical_label("POSITIVE"), Some(SentimentLabel::Positive));
        assert_eq!(canonical_label("positive"), Some(SentimentLabel::Positive));
        assert_eq!(canonical_label("POS"), Some(SentimentLabel::Positive));
        assert_eq!(canonical_label("NEGATIVE"), Some(SentimentLabel::Negative));
        assert_eq!(canonical_label("neu"), Some(SentimentLabel::Neutral));
        assert_eq!(canonical_label("LABEL_2"), Some(SentimentLabel::Positive));
        assert_eq!(canonical_label("label_1"), Some(SentimentLabel::Neutral));
        assert_eq!(canonical_label("LABEL_0"), Some(SentimentLabel::Negative));
        assert_eq!(canonical_label("joy"), None);
        assert_eq!(label_or_neutral("joy"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![c("negative", 0.1), c("positive", 0.7), c("neutral", 0.2)]);
        assert_eq!(ranked[0].label, "positive");
        assert_eq!(ranked[2].label, "negative");
    }

    #[test]
    fn test_confident_answer_is_mapped() {
        let ranked = rank(vec![c("LABEL_2", 0.85), c("LABEL_1", 0.1), c("LABEL_0", 0.05)]);
        assert_eq!(
            interpret("love it", &ranked),
            Some((SentimentLabel::Positive, 0.85))
        );
    }

    #[test]
    fn test_narrow_margin_is_neutral_even_above_floor() {
        let ranked = rank(vec![c("negative", 0.47), c("positive", 0.45), c("neutral", 0.08)]);
        assert_eq!(interpret("hmm", &ranked).map(|(l, _)| l), Some(SentimentLabel::Neutral));
    }

    #[test]
    fn test_unknown_label_is_neutral() {
        let ranked = rank(vec![c("joy", 0.9), c("anger", 0.1)]);
        assert_eq!(interpret("yay", &ranked).map(|(l, _)| l), Some(SentimentLabel::Neutral));
    }

    #[test]
    fn test_empty_candidates_are_unparseable() {
        assert_eq!(interpret("text", &[]), None);
    }

    #[test]
    fn test_low_confidence_question_is_neutral() {
        let ranked = rank(vec![c("positive", 0.39), c("neutral", 0.31), c("negative", 0.30)]);
        assert_eq!(
            interpret_low_confidence("Does this work on Linux?", &ranked),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_low_confidence_acknowledgment_is_neutral() {
        let ranked = rank(vec![c("negative", 0.38), c("positive", 0.02)]);
        assert_eq!(interpret_low_confidence("  Got it ", &ranked), SentimentLabel::Neutral);
    }

    #[test]
    fn test_low_confidence_flat_distribution_is_neutral() {
        let ranked = rank(vec![c("positive", 0.36), c("negative", 0.33), c("neutral", 0.31)]);
        assert_eq!(interpret_low_confidence("the video", &ranked), SentimentLabel::Neutral);
    }

    #[test]
    fn test_low_confidence_falls_back_to_top_label() {
        let ranked = rank(vec![c("negative", 0.38), c("neutral", 0.37), c("positive", 0.05)]);
        assert_eq!(
            interpret("the sound mixing in this one", &ranked),
            Some((SentimentLabel::Negative, 0.38))
        );
    }
}
