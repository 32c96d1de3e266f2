//! Criterion benchmarks for per-language stemming throughput.
//!
//! Run: cargo bench --bench stem_bench
//! Output: target/criterion/ (HTML reports)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stemmer_core::{stem, Language};

/// Benchmark a single representative word per language, end to end
/// through the public facade (normalize -> regions -> hash -> steps ->
/// unhash).
fn bench_per_language(c: &mut Criterion) {
    let samples: &[(&str, Language)] = &[
        ("nationalization", Language::English),
        ("aufeinanderfolgen", Language::German),
        ("qualidades", Language::Portuguese),
        ("fullständigheterna", Language::Swedish),
        ("hundernes", Language::Danish),
        ("vrijheden", Language::Dutch),
        ("talossakin", Language::Finnish),
        ("communication", Language::French),
        ("nazionalizzazione", Language::Italian),
        ("guttenes", Language::Norwegian),
        ("rápidamente", Language::Spanish),
        ("книгами", Language::Russian),
    ];
    for (word, lang) in samples {
        c.bench_function(&format!("stem_{lang}"), |b| {
            b.iter(|| stem(black_box(word), black_box(*lang)))
        });
    }
}

/// Benchmark the no-op stemmer, the cheapest possible dispatch path.
fn bench_none(c: &mut Criterion) {
    c.bench_function("stem_none", |b| {
        b.iter(|| stem(black_box("whatever"), black_box(Language::None)))
    });
}

/// Benchmark a short word that every language returns unchanged below its
/// minimum length, exercising the early-return path.
fn bench_short_word_early_return(c: &mut Criterion) {
    c.bench_function("stem_short_word", |b| {
        b.iter(|| stem(black_box("a"), black_box(Language::English)))
    });
}

criterion_group!(
    benches,
    bench_per_language,
    bench_none,
    bench_short_word_early_return,
);
criterion_main!(benches);
