//! Criterion benchmarks comparing ArrayHeap with std's BinaryHeap
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```
//!
//! Both heaps run the same workloads through the `Heap` trait:
//! - `fill_drain`: add n pseudo-random values, then remove them all
//! - `interleaved`: a mix of adds and removals that keeps the heap around n/2

use array_heap::{ArrayHeap, Heap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BinaryHeap;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (0..n).map(|_| rng.gen()).collect()
}

fn fill_drain<H: Heap<u64>>(values: &[u64]) -> u64 {
    let mut heap = H::new();
    for &value in values {
        heap.add(value);
    }
    let mut checksum = 0u64;
    while let Some(value) = heap.remove_root() {
        checksum = checksum.wrapping_add(value);
    }
    checksum
}

fn interleaved<H: Heap<u64>>(values: &[u64]) -> u64 {
    let mut heap = H::new();
    let mut checksum = 0u64;
    for (i, &value) in values.iter().enumerate() {
        heap.add(value);
        if i % 2 == 1 {
            if let Some(root) = heap.remove_root() {
                checksum = checksum.wrapping_add(root);
            }
        }
    }
    checksum
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    for n in SIZES {
        let values = random_values(n);
        group.bench_with_input(BenchmarkId::new("array_heap", n), &values, |b, v| {
            b.iter(|| black_box(fill_drain::<ArrayHeap<u64>>(v)))
        });
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &values, |b, v| {
            b.iter(|| black_box(fill_drain::<BinaryHeap<u64>>(v)))
        });
    }
    group.finish();
}

fn bench_interleaved(c: &mut Criterion) {
    let mut group = c.benchmark_group("interleaved");
    for n in SIZES {
        let values = random_values(n);
        group.bench_with_input(BenchmarkId::new("array_heap", n), &values, |b, v| {
            b.iter(|| black_box(interleaved::<ArrayHeap<u64>>(v)))
        });
        group.bench_with_input(BenchmarkId::new("binary_heap", n), &values, |b, v| {
            b.iter(|| black_box(interleaved::<BinaryHeap<u64>>(v)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_interleaved);
criterion_main!(benches);
