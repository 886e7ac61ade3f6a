//! Text preparation ahead of classification

use crate::lexicon::CONTRACTIONS;
use aho_corasick::{AhoCorasick, MatchKind};
use commentpulse_core::Result;
use regex::Regex;

/// Longest run of one punctuation mark kept by [`TextNormalizer::normalize`]
const MAX_PUNCT_RUN: usize = 3;

/// Cleans raw comment text for remote models and cache lookups
pub struct TextNormalizer {
    contractions: AhoCorasick,
    line_break: Regex,
    html_tag: Regex,
}

impl TextNormalizer {
    pub fn new() -> Result<Self> {
        let contractions = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostFirst)
            .build(CONTRACTIONS.iter().map(|(from, _)| *from))
            .map_err(|e| {
                commentpulse_core::Error::classifier(format!(
                    "Failed to build contraction matcher: {e}"
                ))
            })?;

        Ok(Self {
            contractions,
            line_break: Regex::new(r"(?i)<br\s*/?>").map_err(|e| {
                commentpulse_core::Error::classifier(format!("Failed to compile line break regex: {e}"))
            })?,
            html_tag: Regex::new(r"<[^>]*>").map_err(|e| {
                commentpulse_core::Error::classifier(format!("Failed to compile HTML tag regex: {e}"))
            })?,
        })
    }

    /// Trim, collapse whitespace, cap punctuation runs and expand contractions
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let capped = cap_punctuation_runs(&collapsed);
        let expansions: Vec<&str> = CONTRACTIONS.iter().map(|(_, to)| *to).collect();
        self.contractions.replace_all(&capped, &expansions)
    }

    /// Convert the platform's HTML-bearing comment text into plain text
    pub fn strip_html(&self, text: &str) -> String {
        let spaced = self.line_break.replace_all(text, " ");
        let stripped = self.html_tag.replace_all(&spaced, "");
        decode_entities(&stripped)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new().expect("Failed to create text normalizer")
    }
}

/// Key under which a label is cached: trimmed, lowercased text
pub fn cache_key(text: &str) -> String {
    text.trim().to_lowercase()
}

fn cap_punctuation_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if matches!(c, '!' | '?' | '.') && run > MAX_PUNCT_RUN {
            continue;
        }
        out.push(c);
    }
    out
}

fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
