use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use strided_amax::argmax_mag1;

fn make_random_pairs(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..2 * len).map(|_| rng.sample(StandardNormal)).collect()
}

fn bench_izamax(c: &mut Criterion) {
    let mut group = c.benchmark_group("izamax");
    for &n in &[64usize, 1_000, 100_000] {
        for &inc in &[1usize, 4] {
            let x = make_random_pairs(n * inc, 42);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(format!("inc{inc}"), n), &n, |b, &n| {
                b.iter(|| unsafe {
                    argmax_mag1(black_box(n as isize), black_box(x.as_ptr()), inc as isize)
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_izamax);
criterion_main!(benches);
