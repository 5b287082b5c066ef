use criterion::{criterion_group, criterion_main, Criterion};
use findex_core::{tokenizer::tokenize, DocumentStore, InvertedIndex, TermLimits};
use std::path::PathBuf;

const SAMPLE: &str = "It was the best of times, it was the worst of times, \
it was the age of wisdom, it was the age of foolishness, it was the epoch \
of belief, it was the epoch of incredulity, it was the season of Light, it \
was the season of Darkness, it was the spring of hope, it was the winter of \
despair, we had everything before us, we had nothing before us";

fn bench_tokenize(c: &mut Criterion) {
    let limits = TermLimits::default();
    c.bench_function("tokenize_sample", |b| {
        b.iter(|| tokenize(SAMPLE, limits).count())
    });
}

fn bench_build_index(c: &mut Criterion) {
    let docs: Vec<(PathBuf, String)> = (0..100)
        .map(|i| (PathBuf::from(format!("{i}.txt")), SAMPLE.to_string()))
        .collect();
    let store = DocumentStore::from_documents(docs);
    c.bench_function("build_index_100_docs", |b| {
        b.iter(|| InvertedIndex::build(&store, TermLimits::default()))
    });
}

criterion_group!(benches, bench_tokenize, bench_build_index);
criterion_main!(benches);
