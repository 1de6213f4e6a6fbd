//! Latency benchmarks for the vibe pipeline
//!
//! A run is O(patterns x triggers x tokens) and should stay well under a
//! millisecond for chat-sized inputs.
//!
//! Run with: cargo bench -p vibecheck-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vibecheck_core::PatternEntry;
use vibecheck_engine::{Normalizer, PipelineBuilder, SynonymTable, VibePipeline};

const TEST_CASES: [(&str, &str); 5] = [
    ("no_match_short", "sup"),
    ("single_word", "lets goooo im hyped"),
    ("phrase_match", "hey bro, I'm feeling kinda sad today"),
    ("negated", "i am not sad at all"),
    (
        "long_mixed",
        "honestly this week was so annoying and i'm furious about work, but the weekend \
         plans have me hyped and the weather is great so maybe it is all good after all",
    ),
];

/// Benchmark full runs over the built-in patterns
fn benchmark_builtin_pipeline(c: &mut Criterion) {
    let pipeline = VibePipeline::new().expect("Failed to build pipeline");

    let mut group = c.benchmark_group("Builtin_Pipeline");
    group.significance_level(0.05);
    group.sample_size(100);

    for (name, text) in TEST_CASES {
        group.bench_with_input(BenchmarkId::new("run", name), &text, |b, text| {
            b.iter(|| pipeline.run(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark normalization alone
fn benchmark_normalizer(c: &mut Criterion) {
    let normalizer = Normalizer::new(SynonymTable::new()).expect("Failed to build normalizer");

    let mut group = c.benchmark_group("Normalizer");
    for (name, text) in TEST_CASES {
        group.bench_with_input(BenchmarkId::new("analyze", name), &text, |b, text| {
            b.iter(|| normalizer.analyze(black_box(text)));
        });
    }
    group.finish();
}

/// Scaling with the number of pattern entries
fn benchmark_pattern_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pattern_Scaling");
    group.sample_size(50);

    for count in [10usize, 100, 1000] {
        let patterns = (0..count)
            .map(|i| {
                PatternEntry::new(
                    format!("category_{i}"),
                    [format!("word{i}"), format!("some phrase {i}")],
                    "response",
                )
            })
            .collect();
        let pipeline = PipelineBuilder::new()
            .patterns(patterns)
            .build()
            .expect("Failed to build pipeline");

        group.bench_with_input(BenchmarkId::new("run", count), &count, |b, _| {
            b.iter(|| pipeline.run(black_box("nothing here but some phrase 7 and word3")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_builtin_pipeline,
    benchmark_normalizer,
    benchmark_pattern_scaling
);
criterion_main!(benches);
