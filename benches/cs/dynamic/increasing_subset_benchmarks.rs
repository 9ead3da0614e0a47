use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use increasing_subset::cs::dynamic::{
    longest_increasing_subsequence_with, CandidateStrategy, LisEngine,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_sequence(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1_000)).collect()
}

fn bench_pruned(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis_pruned");

    for &size in &[64, 365, 1_000, 10_000] {
        let values = random_sequence(size, 42);
        group.bench_with_input(BenchmarkId::new("batch", size), &values, |b, values| {
            b.iter(|| {
                longest_increasing_subsequence_with(black_box(values), CandidateStrategy::Pruned)
            })
        });
        group.bench_with_input(BenchmarkId::new("engine", size), &values, |b, values| {
            b.iter(|| {
                let mut engine = LisEngine::new();
                for &value in values {
                    engine.feed(black_box(value));
                }
                engine.longest_length()
            })
        });
    }

    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis_exhaustive");

    // Enumeration is exponential; keep inputs tiny.
    for &size in &[8, 12, 16] {
        let values = random_sequence(size, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| {
                longest_increasing_subsequence_with(
                    black_box(values),
                    CandidateStrategy::Exhaustive,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pruned, bench_exhaustive);
criterion_main!(benches);
