//! Criterion benchmarks of the selection strategies
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench kth_bench
//!
//! # Only shuffled inputs
//! cargo bench --bench kth_bench -- 'kth/random'
//! ```
//!
//! Inputs are `[0, n)` in three orders: shuffled with a fixed seed,
//! ascending (every value after the seed is rejected), and descending
//! (every value replaces the maximum).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kth_smallest::harness::shuffled_range;
use kth_smallest::Strategy;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random(n: usize) -> Vec<u32> {
    shuffled_range(n, &mut StdRng::seed_from_u64(42)).unwrap()
}

fn ascending(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

fn descending(n: usize) -> Vec<u32> {
    (0..n as u32).rev().collect()
}

fn bench_order(c: &mut Criterion, order: &str, input: fn(usize) -> Vec<u32>) {
    let mut group = c.benchmark_group(format!("kth/{order}"));

    for log_n in [14, 17] {
        let n = 1usize << log_n;
        let values = input(n);

        for log_k in [4, 8, 10] {
            let k = 1usize << log_k;
            let params = format!("2^{log_n}/2^{log_k}");

            for strategy in Strategy::ALL {
                group.bench_with_input(
                    BenchmarkId::new(strategy.name(), &params),
                    &values,
                    |b, values| b.iter(|| strategy.select(black_box(values.as_slice()), k)),
                );
            }
        }
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    bench_order(c, "random", random);
}

fn bench_ascending(c: &mut Criterion) {
    bench_order(c, "asc", ascending);
}

fn bench_descending(c: &mut Criterion) {
    bench_order(c, "desc", descending);
}

criterion_group!(benches, bench_random, bench_ascending, bench_descending);
criterion_main!(benches);
