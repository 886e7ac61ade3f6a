//! Rendering of classified comments

use commentpulse_core::{Comment, SentimentLabel, SentimentSummary};
use serde::Serialize;
use std::fmt::Write;

/// Longest comment excerpt shown in table output
const EXCERPT_CHARS: usize = 60;

#[derive(Debug, Serialize)]
pub struct ClassifiedComment<'a> {
    pub id: &'a str,
    pub author: &'a str,
    pub text: &'a str,
    pub sentiment: SentimentLabel,
}

#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub sentiment: SentimentLabel,
    pub count: usize,
    pub percentage: String,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub comments: Vec<ClassifiedComment<'a>>,
    pub summary: Vec<SummaryRow>,
    pub total: usize,
}

impl<'a> Report<'a> {
    /// Pair each comment with its label. The summary covers every input,
    /// `shown` restricts the listed comments.
    pub fn new(shown: &[(&'a Comment, SentimentLabel)], summary: &SentimentSummary) -> Self {
        let comments = shown
            .iter()
            .map(|(comment, sentiment)| ClassifiedComment {
                id: &comment.id,
                author: &comment.author,
                text: &comment.text,
                sentiment: *sentiment,
            })
            .collect();

        let summary_rows = summary
            .rows()
            .into_iter()
            .map(|(sentiment, count, percentage)| SummaryRow {
                sentiment,
                count,
                percentage,
            })
            .collect();

        Self {
            comments,
            summary: summary_rows,
            total: summary.total(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_table(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{:<10} {:<20} TEXT", "SENTIMENT", "AUTHOR");
        for row in &self.comments {
            let _ = writeln!(
                out,
                "{:<10} {:<20} {}",
                row.sentiment.as_str(),
                excerpt(row.author, 20),
                excerpt(row.text, EXCERPT_CHARS)
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{:<10} {:>6} {:>8}", "SENTIMENT", "COUNT", "SHARE");
        for row in &self.summary {
            let _ = writeln!(
                out,
                "{:<10} {:>6} {:>8}",
                row.sentiment.as_str(),
                row.count,
                row.percentage
            );
        }
        let _ = writeln!(out, "{:<10} {:>6}", "Total", self.total);

        out
    }
}

/// Single-line excerpt of at most `max` characters
fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut cut: String = flat.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
