//! CommentPulse
//!
//! Classifies exported video comments as positive, neutral or negative.
//!
//! Comments are read as a JSON array of comment records, classified through
//! the remote model chain with a lexical fallback, and reported together with
//! a sentiment summary.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use commentpulse_classifiers::observability::describe_metrics;
use commentpulse_classifiers::{filter_by_label, Arbitrator, BatchOrchestrator, SentimentCache};
use commentpulse_core::{Comment, SentimentLabel, SentimentSummary};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

mod config;
mod output;

use config::Overrides;
use output::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "commentpulse")]
#[command(about = "Sentiment classification for video comments", long_about = None)]
struct Cli {
    /// JSON file holding an array of comments (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "commentpulse.yaml")]
    config: String,

    /// Bearer token for the inference service
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Comments classified concurrently per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Pause between chunks in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Per-call remote model timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Skip remote models and use the lexical scorer only
    #[arg(long)]
    lexical_only: bool,

    /// Only list comments with this sentiment
    #[arg(long)]
    filter: Option<SentimentLabel>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_token: self.api_token.clone(),
            chunk_size: self.chunk_size,
            delay_ms: self.delay_ms,
            timeout_ms: self.timeout_ms,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.json_logs);
    describe_metrics();

    let config = config::load(&cli.config, &cli.overrides())?;
    let comments = read_comments(cli.input.as_deref())?;
    info!(comments = comments.len(), "Comments loaded");

    let arbitrator = if cli.lexical_only {
        info!("Remote models disabled, using lexical scorer only");
        Arbitrator::lexical_only(Arc::new(SentimentCache::new(config.cache_capacity)))?
    } else {
        Arbitrator::from_config(&config)?
    };
    let orchestrator = BatchOrchestrator::from_config(Arc::new(arbitrator), &config.batch);

    let progress = |done: usize, total: usize| eprintln!("classified {done}/{total}");
    let labels = orchestrator
        .classify_comments(&comments, Some(&progress))
        .await;

    let summary = SentimentSummary::from_labels(&labels);
    let shown = select_rows(&comments, &labels, cli.filter);

    let report = Report::new(&shown, &summary);
    let rendered = match cli.format {
        OutputFormat::Table => report.to_table(),
        OutputFormat::Json => report.to_json()?,
        OutputFormat::Yaml => report.to_yaml()?,
    };
    print!("{rendered}");
    if cli.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

/// Comments to list alongside their labels, restricted to `filter` when given
fn select_rows<'a>(
    comments: &'a [Comment],
    labels: &[SentimentLabel],
    filter: Option<SentimentLabel>,
) -> Vec<(&'a Comment, SentimentLabel)> {
    match filter {
        Some(wanted) => filter_by_label(comments, labels, Some(wanted))
            .into_iter()
            .map(|comment| (comment, wanted))
            .collect(),
        None => comments.iter().zip(labels.iter().copied()).collect(),
    }
}

/// Read a JSON array of comments from `path`, or stdin when `None`
fn read_comments(path: Option<&Path>) -> Result<Vec<Comment>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read comments from stdin")?;
            buf
        }
    };

    parse_comments(&content)
}

fn parse_comments(content: &str) -> Result<Vec<Comment>> {
    serde_json::from_str(content).context("Expected a JSON array of comments")
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("commentpulse=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("commentpulse=info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
