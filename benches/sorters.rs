//! Benchmarks for every algorithm on shuffled input, with snapshots discarded.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sortkit::{Algorithm, List, Silent};

/// Power of two, so that the bitonic network sorts completely.
const LEN: usize = 1024;

fn shuffled(len: usize) -> Vec<i32> {
    let mut values: Vec<i32> = (0..len as i32).collect();
    values.shuffle(&mut StdRng::seed_from_u64(0x5eed));
    values
}

fn bench_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("array");
    let input = shuffled(LEN);

    for algorithm in Algorithm::ALL.iter().filter(|a| !a.is_list()) {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), LEN), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |array| algorithm.sort_array(black_box(array), &mut Silent),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");
    // Both list algorithms are quadratic.
    let len = LEN / 4;
    let input = shuffled(len);

    for algorithm in Algorithm::ALL.iter().filter(|a| a.is_list()) {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), len), &input, |b, input| {
            b.iter_batched_ref(
                || input.iter().copied().collect::<List<i32>>(),
                |list| algorithm.sort_list(black_box(list), &mut Silent),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arrays, bench_lists);
criterion_main!(benches);
