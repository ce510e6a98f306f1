//! Criterion benchmarks for the salvia suggestion engine.
//!
//! Covers the two hot paths: exact lookup in the trie and the
//! error-tolerant beam search at increasing cutoffs, plus the monolithic
//! reference distance for comparison.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use salvia::trie::Trie;
use salvia::util::levenshtein::damerau_levenshtein;

/// Build a dictionary of compound words large enough to make the search
/// walk shared prefixes.
fn build_dictionary() -> Trie<f64> {
    let heads = [
        "search", "spell", "correct", "suggest", "word", "byte", "state", "index", "query",
        "candidate", "cursor", "distance", "corpus", "prior", "trie", "beam",
    ];
    let tails = [
        "", "s", "ed", "ing", "er", "ers", "able", "less", "ness", "ful",
    ];

    let mut trie = Trie::new();
    let mut prior = 1.0;
    for head in heads {
        for tail in tails {
            let word = format!("{head}{tail}");
            trie.insert(word, prior).unwrap();
            prior += 0.01;
        }
    }
    trie
}

fn bench_exact_get(c: &mut Criterion) {
    let trie = build_dictionary();

    c.bench_function("trie_get", |b| {
        b.iter(|| {
            black_box(trie.get(black_box("suggesting")));
            black_box(trie.get(black_box("missing")));
        })
    });
}

fn bench_tolerant_find(c: &mut Criterion) {
    let trie = build_dictionary();

    c.bench_function("tolerant_find_cutoff_1", |b| {
        b.iter(|| black_box(trie.tolerant_find(black_box("serach"), 1)))
    });

    c.bench_function("tolerant_find_cutoff_2", |b| {
        b.iter(|| black_box(trie.tolerant_find(black_box("serach"), 2)))
    });

    c.bench_function("tolerant_find_cutoff_3", |b| {
        b.iter(|| black_box(trie.tolerant_find(black_box("serach"), 3)))
    });
}

fn bench_reference_distance(c: &mut Criterion) {
    c.bench_function("damerau_levenshtein", |b| {
        b.iter(|| {
            black_box(damerau_levenshtein(
                black_box(b"spelling"),
                black_box(b"spleling"),
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_exact_get,
    bench_tolerant_find,
    bench_reference_distance
);
criterion_main!(benches);
