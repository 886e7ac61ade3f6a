//! Rule-based lexical sentiment scorer
//!
//! Pure and deterministic. Text is split into sentences and words, each word
//! is scored against the weighted lexicon tiers with negation, intensifier,
//! diminisher and contrast handling, then emoji, punctuation, capitalisation
//! and character repetition adjust the document score before it is normalised
//! per sentence and thresholded into a label.

use crate::classifier::{Classifier, ClassifierTier};
use crate::lexicon::{self, EMOJI_WEIGHTS, SARCASM_INDICATORS, TIERS};
use aho_corasick::AhoCorasick;
use commentpulse_core::{ClassificationOutcome, Result, SentimentLabel};
use regex::Regex;

const NEGATION_FACTOR: f32 = -0.8;
const CONTRAST_BOOST: f32 = 1.5;
const EXCLAMATION_STEP: f32 = 0.15;
const EXCLAMATION_CAP: f32 = 0.6;
const CAPS_RATIO: f32 = 0.5;
const CAPS_MIN_LEN: usize = 10;
const CAPS_BOOST: f32 = 1.4;
const REPEAT_STEP: f32 = 0.1;
const QUESTION_OVERRIDE: f32 = 2.5;
const SARCASM_FACTOR: f32 = -0.5;

const STRONG_THRESHOLD: f32 = 1.0;
const WEAK_THRESHOLD: f32 = 0.3;

/// Lexicon-based sentiment scorer
pub struct LexicalScorer {
    name: String,
    sentence_splitter: Regex,
    emoji: AhoCorasick,
    sarcasm: AhoCorasick,
}

/// Intermediate scoring state, kept inside the crate
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LexicalScore {
    pub normalized: f32,
    pub sentence_count: usize,
    pub question: bool,
}

impl LexicalScore {
    fn label(&self) -> SentimentLabel {
        if self.question {
            return SentimentLabel::Neutral;
        }
        let n = self.normalized;
        if n >= STRONG_THRESHOLD {
            SentimentLabel::Positive
        } else if n <= -STRONG_THRESHOLD {
            SentimentLabel::Negative
        } else if n > WEAK_THRESHOLD {
            SentimentLabel::Positive
        } else if n < -WEAK_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    fn confidence(&self) -> f32 {
        if self.question {
            return 0.0;
        }
        (self.normalized.abs() / 3.0).min(1.0)
    }
}

impl LexicalScorer {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let sentence_splitter = Regex::new(r"[.!?]+").map_err(|e| {
            commentpulse_core::Error::classifier(format!("Failed to compile sentence regex: {e}"))
        })?;

        let emoji = AhoCorasick::new(EMOJI_WEIGHTS.iter().map(|(glyph, _)| *glyph))
            .map_err(|e| {
                commentpulse_core::Error::classifier(format!("Failed to build emoji matcher: {e}"))
            })?;

        let sarcasm = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SARCASM_INDICATORS)
            .map_err(|e| {
                commentpulse_core::Error::classifier(format!(
                    "Failed to build sarcasm matcher: {e}"
                ))
            })?;

        Ok(Self {
            name: name.into(),
            sentence_splitter,
            emoji,
            sarcasm,
        })
    }

    /// Classify text into a sentiment label. Total: empty text is Neutral.
    pub fn classify(&self, text: &str) -> SentimentLabel {
        if text.trim().is_empty() {
            return SentimentLabel::Neutral;
        }
        self.score(text).label()
    }

    /// Classify and report a confidence derived from the normalized score
    pub fn outcome(&self, text: &str) -> ClassificationOutcome {
        if text.trim().is_empty() {
            return ClassificationOutcome::fallback(SentimentLabel::Neutral, 0.0);
        }
        let score = self.score(text);
        ClassificationOutcome::fallback(score.label(), score.confidence())
    }

    pub(crate) fn score(&self, text: &str) -> LexicalScore {
        let mut total = 0.0f32;
        let mut sentence_count = 0usize;

        for sentence in self.sentence_splitter.split(text) {
            if sentence.trim().is_empty() {
                continue;
            }
            total += score_sentence(&tokenize(sentence));
            sentence_count += 1;
        }

        // Emoji bypass negation and modifiers
        total += self.emoji_score(text);

        let exclamations = text.matches('!').count();
        let questions = text.matches('?').count();

        if exclamations > 1 && total != 0.0 {
            total *= 1.0 + (exclamations as f32 * EXCLAMATION_STEP).min(EXCLAMATION_CAP);
        }

        if caps_ratio(text) > CAPS_RATIO && text.chars().count() > CAPS_MIN_LEN {
            total *= CAPS_BOOST;
        }

        let repeats = repeated_runs(text);
        if repeats > 0 && total != 0.0 {
            total *= 1.0 + repeats as f32 * REPEAT_STEP;
        }

        let mut normalized = total / sentence_count.max(1) as f32;

        let question =
            questions > exclamations && questions > 0 && normalized.abs() < QUESTION_OVERRIDE;

        if !question && normalized > 1.0 && self.sarcasm.is_match(text) {
            normalized *= SARCASM_FACTOR;
        }

        LexicalScore {
            normalized,
            sentence_count,
            question,
        }
    }

    /// Sum of `occurrences × weight` over every emoji key. Overlapping keys
    /// each count, "👍🏽" scores as both "👍" and "👍🏽".
    fn emoji_score(&self, text: &str) -> f32 {
        self.emoji
            .find_overlapping_iter(text)
            .map(|m| EMOJI_WEIGHTS[m.pattern().as_usize()].1)
            .sum()
    }
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new().expect("Failed to create lexical scorer")
    }
}

#[async_trait::async_trait]
impl Classifier for LexicalScorer {
    async fn attempt(&self, text: &str) -> Option<ClassificationOutcome> {
        Some(self.outcome(text))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn tier(&self) -> ClassifierTier {
        ClassifierTier::Local
    }
}

/// Lowercase words with everything outside `[A-Za-z0-9'_-]` stripped
fn tokenize(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|raw| {
            raw.chars()
                .map(|c| if c == '\u{2019}' { '\'' } else { c })
                .filter(|c| c.is_ascii_alphanumeric() || matches!(*c, '\'' | '_' | '-'))
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn score_sentence(words: &[String]) -> f32 {
    let contrast_at = words.iter().rposition(|w| lexicon::is_contrast(w));
    let mut sentence_score = 0.0;

    for (i, word) in words.iter().enumerate() {
        let Some(weight) = lexicon_weight(word) else {
            continue;
        };

        let prev = i.checked_sub(1).map_or("", |j| words[j].as_str());
        let prev2 = i.checked_sub(2).map_or("", |j| words[j].as_str());
        let bigram = format!("{prev2} {prev}");

        let negated = lexicon::is_negation(prev)
            || lexicon::is_negation(prev2)
            || lexicon::is_negation_idiom(&bigram);

        let mut modifier = lexicon::intensifier(prev).unwrap_or(1.0);
        if let Some(m) = lexicon::diminisher(prev).or_else(|| lexicon::diminisher(&bigram)) {
            modifier = m;
        }
        if let Some(m) = lexicon::intensifier(prev2) {
            modifier *= m;
        }

        let mut score = weight * modifier;
        if negated {
            score *= NEGATION_FACTOR;
        }
        if contrast_at.is_some_and(|c| i > c) {
            score *= CONTRAST_BOOST;
        }
        sentence_score += score;
    }

    sentence_score
}

/// Weight of the first tier with an entry that contains `word` or is
/// contained in it ("loved" ⊇ "love", "disappoint" ⊆ "disappointing").
///
/// Modifier words are looked up like any other, "hardly" scores as "hard".
fn lexicon_weight(word: &str) -> Option<f32> {
    TIERS
        .iter()
        .find(|tier| {
            tier.words
                .iter()
                .any(|entry| word.contains(entry) || entry.contains(word))
        })
        .map(|tier| tier.weight)
}

/// Fraction of alphabetic characters that are uppercase
fn caps_ratio(text: &str) -> f32 {
    let (letters, upper) = text
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(l, u), c| {
            (l + 1, u + usize::from(c.is_uppercase()))
        });
    if letters == 0 {
        0.0
    } else {
        upper as f32 / letters as f32
    }
}

/// Number of maximal runs of three or more identical characters
fn repeated_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut prev: Option<char> = None;
    let mut len = 0;

    for c in text.chars() {
        if Some(c) == prev {
            len += 1;
        } else {
            if len >= 3 {
                runs += 1;
            }
            prev = Some(c);
            len = 1;
        }
    }
    if len >= 3 {
        runs += 1;
    }
    runs
}
