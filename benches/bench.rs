//! Criterion benchmarks for lexscore.
//!
//! Covers the three stages of scoring over generated documents:
//! - Token frequency counting
//! - Lexicon matching
//! - Batch scoring of every category

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexscore::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;

const VOCABULARY: usize = 5_000;
const CATEGORIES: usize = 16;

fn vocabulary() -> Vec<String> {
    (0..VOCABULARY).map(|i| format!("w{i}")).collect()
}

/// Generate a document of `length` tokens drawn from the vocabulary.
fn generate_document(vocabulary: &[String], length: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..length)
        .filter_map(|_| vocabulary.choose(&mut rng).cloned())
        .collect()
}

/// Generate a lexicon whose categories each weight a random tenth of the vocabulary.
fn generate_lexicon(vocabulary: &[String]) -> Lexicon {
    let mut rng = rand::rng();
    (0..CATEGORIES)
        .map(|c| {
            let weights: CategoryWeights = vocabulary
                .iter()
                .filter_map(|token| {
                    if rng.random_bool(0.1) {
                        Some((token.clone(), rng.random_range(-2.0..2.0)))
                    } else {
                        None
                    }
                })
                .collect();
            (format!("category_{c}"), weights)
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let vocabulary = vocabulary();
    let lexicon = generate_lexicon(&vocabulary);
    let document = generate_document(&vocabulary, 10_000);
    let freqs = count_frequencies(&document);
    let intercepts = Intercepts::new();
    let options = ScoringOptions::default();

    let mut group = c.benchmark_group("scoring");
    group.throughput(Throughput::Elements(document.len() as u64));

    group.bench_function("count_frequencies", |b| {
        b.iter(|| count_frequencies(black_box(&document)))
    });

    group.bench_function("match_lexicon", |b| {
        let matcher = LexiconMatcher::default();
        b.iter(|| matcher.match_lexicon(black_box(&freqs), black_box(&lexicon)))
    });

    group.bench_function("score_lexicon", |b| {
        b.iter(|| score_lexicon(black_box(&document), &lexicon, &intercepts, &options))
    });

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
