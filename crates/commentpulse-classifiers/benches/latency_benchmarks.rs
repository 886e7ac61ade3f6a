//! Latency benchmarks for the local classification path
//!
//! The lexical scorer answers whenever every remote model fails, so it has to
//! stay cheap enough to run over a full comment page inline.
//!
//! Run with: cargo bench -p commentpulse-classifiers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use tokio::runtime::Runtime;

use commentpulse_classifiers::{Arbitrator, BatchOrchestrator, LexicalScorer, SentimentCache, TextNormalizer};

fn benchmark_lexical_scorer(c: &mut Criterion) {
    let scorer = LexicalScorer::new().expect("Failed to create lexical scorer");

    let test_cases = vec![
        ("short_positive", "Love this! 😍"),
        ("short_question", "Is this available in 4k?"),
        ("negated", "This is not good at all, honestly"),
        ("contrast", "The intro was great but the rest was painfully boring"),
        (
            "long_mixed",
            "WOW this tutorial is absolutely amazing!!! I was kind of lost at first, \
             but the explanation of lifetimes finally made sense. Audio is a bit quiet though. \
             Yeah right, like anyone reads the docs 🙄",
        ),
    ];

    let mut group = c.benchmark_group("Lexical_Scorer");
    group.significance_level(0.05);
    group.sample_size(100);

    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| scorer.classify(black_box(text)));
        });
    }

    group.finish();
}

fn benchmark_normalizer(c: &mut Criterion) {
    let normalizer = TextNormalizer::new().expect("Failed to create normalizer");
    let text = "  I <b>can't</b> believe   it's this good!!!!!<br>Won't stop watching  ";

    c.bench_function("normalize_and_strip", |b| {
        b.iter(|| normalizer.normalize(&normalizer.strip_html(black_box(text))));
    });
}

/// A full comment page through the lexical-only arbitrator, cache cold
fn benchmark_lexical_batch(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let texts: Vec<String> = (0..100)
        .map(|i| format!("Comment {i}: really great video, but the audio was a bit bad"))
        .collect();

    c.bench_function("lexical_batch_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                let arbitrator = Arbitrator::lexical_only(Arc::new(SentimentCache::default()))
                    .expect("Failed to create arbitrator");
                let orchestrator = BatchOrchestrator::new(Arc::new(arbitrator))
                    .with_chunk_size(100)
                    .with_inter_chunk_delay(std::time::Duration::ZERO);
                orchestrator.classify_batch(black_box(&texts), None).await
            })
        });
    });
}

criterion_group!(
    benches,
    benchmark_lexical_scorer,
    benchmark_normalizer,
    benchmark_lexical_batch
);
criterion_main!(benches);
