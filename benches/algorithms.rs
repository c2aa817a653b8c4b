use criterion::{Criterion, criterion_group, criterion_main};
use numtext_domain::{compute_statistics, count, quicksort, sorted_words, tokenize};
use std::hint::black_box;

fn dataset(n: usize) -> Vec<f64> {
    // LCG で再現可能な値列を作る
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            ((state >> 33) % 1000) as f64
        })
        .collect()
}

fn benchmark_quicksort(c: &mut Criterion) {
    let data = dataset(10_000);
    c.bench_function("quicksort_10k", |b| b.iter(|| black_box(quicksort(black_box(&data)))));
}

fn benchmark_statistics(c: &mut Criterion) {
    let data = dataset(10_000);
    c.bench_function("compute_statistics_10k", |b| {
        b.iter(|| black_box(compute_statistics(black_box(&data)).unwrap()))
    });
}

fn benchmark_word_count(c: &mut Criterion) {
    let text: String = (0..2_000).map(|i| format!("Word{} ", i % 500)).collect();
    c.bench_function("word_count_sorted_2k", |b| {
        b.iter(|| {
            let table = count(tokenize(black_box(&text)));
            black_box(sorted_words(&table))
        })
    });
}

criterion_group!(benches, benchmark_quicksort, benchmark_statistics, benchmark_word_count);
criterion_main!(benches);
