/// Performance benchmarks for the union-find variants and percolation trials
///
/// Run with: cargo bench
///
/// These benchmarks track performance over time to detect regressions. The
/// quick-find variant is only benchmarked at small universe sizes; its
/// linear-time union makes larger runs pointless.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use percolate::percolation::Percolation;
use percolate::union_find::{QuickFind, QuickUnion, WeightedQuickUnion};

/// Generate a fixed pseudo-random union script over a universe of n elements.
fn union_script(n: usize, ops: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..ops)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_union_find_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_find");

    for &n in [1_000usize, 10_000].iter() {
        let script = union_script(n, n);
        group.throughput(Throughput::Elements(script.len() as u64));

        if n <= 1_000 {
            group.bench_with_input(BenchmarkId::new("quick_find", n), &script, |b, script| {
                b.iter(|| {
                    let mut uf = QuickFind::new(n).unwrap();
                    for &(p, q) in script {
                        uf.union(p, q).unwrap();
                    }
                    black_box(uf.find(0).unwrap())
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("quick_union", n), &script, |b, script| {
            b.iter(|| {
                let mut uf = QuickUnion::new(n).unwrap();
                for &(p, q) in script {
                    uf.union(p, q).unwrap();
                }
                black_box(uf.find(0).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("weighted", n), &script, |b, script| {
            b.iter(|| {
                let mut uf = WeightedQuickUnion::new(n).unwrap();
                for &(p, q) in script {
                    uf.union(p, q).unwrap();
                }
                black_box(uf.find(0).unwrap())
            });
        });

        group.bench_with_input(
            BenchmarkId::new("weighted_halving", n),
            &script,
            |b, script| {
                b.iter(|| {
                    let mut uf = WeightedQuickUnion::with_path_compression(n).unwrap();
                    for &(p, q) in script {
                        uf.union(p, q).unwrap();
                    }
                    black_box(uf.find(0).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_percolation_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("percolation_trial");

    for &n in [32usize, 64].iter() {
        let mut order: Vec<usize> = (0..n * n).collect();
        let mut rng = StdRng::seed_from_u64(0xBEEF);
        order.shuffle(&mut rng);

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &order, |b, order| {
            b.iter(|| {
                let mut grid = Percolation::new(n).unwrap();
                for &site in order {
                    grid.open(site / n + 1, site % n + 1).unwrap();
                    if grid.percolates() {
                        break;
                    }
                }
                black_box(grid.number_of_open_sites())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_union_find_variants, bench_percolation_trial);
criterion_main!(benches);
