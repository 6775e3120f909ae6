//! Benchmarks for thread segmentation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use threadsplit::{normalize, pack, Segmenter};

fn sample_text(size: usize) -> String {
    // Generate realistic text with sentence and paragraph structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump!\n\n",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow.\n",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenter");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let segmenter = Segmenter::default();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("normalize", size), &text, |b, text| {
            b.iter(|| normalize(black_box(text)))
        });
    }

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let doc = normalize(&sample_text(100_000));

    // Tight budgets mean many chunks and, at 4, frequent hard splits.
    for max_len in [4, 40, 276] {
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("word", max_len), &doc, |b, doc| {
            b.iter(|| pack(black_box(doc), max_len))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segmenter, bench_normalize, bench_pack);
criterion_main!(benches);
