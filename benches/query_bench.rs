// Benchmarks for the range tree:
// - query: tree walk vs a linear rescan of the same range
// - build: one-time construction cost
// - update: point update with ancestor repair

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use overlay::RangeTree;

const SIZES: [usize; 3] = [256, 4_096, 65_536];

fn make_data(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    return (0..size).map(|_| rng.gen_range(0..1_000)).collect();
}

/// Pre-generate query ranges so range generation stays out of the timing.
fn make_ranges(size: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    return (0..count)
        .map(|_| {
            let a = rng.gen_range(0..size);
            let b = rng.gen_range(0..size);
            (a.min(b), a.max(b))
        })
        .collect();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    for size in SIZES {
        let data = make_data(size, 42);
        let ranges = make_ranges(size, 1_024, 7);
        let tree = RangeTree::new(&data, 0, |a: &u64, b: &u64| a + b).unwrap();

        group.throughput(Throughput::Elements(ranges.len() as u64));
        group.bench_with_input(BenchmarkId::new("tree", size), &ranges, |bench, ranges| {
            bench.iter(|| {
                let mut sum = 0u64;
                for &(start, end) in ranges {
                    sum = sum.wrapping_add(tree.query(start, end).unwrap());
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("linear", size), &ranges, |bench, ranges| {
            bench.iter(|| {
                let mut sum = 0u64;
                for &(start, end) in ranges {
                    let direct: u64 = data[start..=end].iter().sum();
                    sum = sum.wrapping_add(direct);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in SIZES {
        let data = make_data(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |bench, data| {
            bench.iter(|| {
                let tree = RangeTree::new(data, 0, |a: &u64, b: &u64| a + b).unwrap();
                black_box(tree.len())
            });
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_update");
    for size in SIZES {
        let data = make_data(size, 42);
        let updates: Vec<(usize, u64)> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..1_024)
                .map(|_| (rng.gen_range(0..size), rng.gen_range(0..1_000)))
                .collect()
        };

        group.throughput(Throughput::Elements(updates.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &updates, |bench, updates| {
            bench.iter(|| {
                let mut tree = RangeTree::new(&data, 0, |a: &u64, b: &u64| a + b).unwrap();
                for &(index, value) in updates {
                    tree.set(index, value).unwrap();
                }
                black_box(tree.query(0, size - 1).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_query, bench_build, bench_update);
criterion_main!(benches);
