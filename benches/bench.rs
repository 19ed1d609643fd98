//! Criterion benchmarks for the Orthos spelling corrector.
//!
//! Covers the two hot paths:
//! - Single-edit candidate generation
//! - Full correction (training excluded)

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use orthos::spelling::{SpellCorrector, edits1};
use std::hint::black_box;

/// Build a small synthetic corpus with a skewed frequency profile.
fn generate_corpus() -> String {
    let words = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog",
        "spelling", "correction", "frequency", "dictionary", "candidate",
        "edit", "distance", "word", "corpus", "training", "token", "letter",
    ];

    let mut corpus = String::new();
    for (i, word) in words.iter().enumerate() {
        // Earlier words appear more often.
        for _ in 0..(words.len() - i) {
            corpus.push_str(word);
            corpus.push(' ');
        }
    }
    corpus
}

fn bench_edits1(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits1");

    for word in ["cat", "spelling", "incomprehensible"] {
        group.throughput(Throughput::Elements(1));
        group.bench_function(word, |b| {
            b.iter(|| edits1(black_box(word)));
        });
    }

    group.finish();
}

fn bench_correct(c: &mut Criterion) {
    let corpus = generate_corpus();
    let corrector = SpellCorrector::from_corpus(&corpus);

    let mut group = c.benchmark_group("correct");

    // Known word: resolved at distance 0.
    group.bench_function("known", |b| {
        b.iter(|| corrector.correct(black_box("spelling")));
    });

    // One edit away.
    group.bench_function("one_edit", |b| {
        b.iter(|| corrector.correct(black_box("speling")));
    });

    // Two edits away: forces the restricted edit-2 expansion.
    group.bench_function("two_edits", |b| {
        b.iter(|| corrector.correct(black_box("spelng")));
    });

    // Out of range: the full search runs and the input is echoed.
    group.bench_function("unknown", |b| {
        b.iter(|| corrector.correct(black_box("qqqqqq")));
    });

    group.finish();
}

criterion_group!(benches, bench_edits1, bench_correct);
criterion_main!(benches);
