use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizcraft_core::synth::{extract_keywords, generate_distractors, generate_mcqs};
use quizcraft_core::traits::{KeywordExtractor, PosTag, TaggedToken};

/// Minimal tagger for benchmarking: every whitespace token is an
/// alphabetic noun.
struct BenchTagger;

impl KeywordExtractor for BenchTagger {
    fn name(&self) -> &str {
        "bench"
    }

    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        text.split_whitespace()
            .map(|t| TaggedToken {
                text: t.to_string(),
                pos: PosTag::Noun,
                is_alpha: true,
                is_stop: false,
            })
            .collect()
    }
}

fn context(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_extract_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_keywords");
    let tagger = BenchTagger;

    for &words in &[100usize, 1000] {
        let text = context(words);
        group.bench_function(format!("words={words}"), |b| {
            b.iter(|| extract_keywords(black_box(&tagger), black_box(&text), black_box(15)))
        });
    }

    group.finish();
}

fn bench_distractors(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_distractors");
    let keywords: Vec<String> = (0..15).map(|i| format!("word{i}")).collect();

    group.bench_function("pool=15,n=3", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| generate_distractors(black_box("word0"), black_box(&keywords), 3, &mut rng))
    });

    group.finish();
}

fn bench_mcqs(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_mcqs");
    let tagger = BenchTagger;
    let text = context(200);

    group.bench_function("count=10", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| generate_mcqs(black_box(&tagger), black_box(&text), black_box(10), &mut rng))
    });

    group.finish();
}

criterion_group!(benches, bench_extract_keywords, bench_distractors, bench_mcqs);
criterion_main!(benches);
