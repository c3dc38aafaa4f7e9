//! Criterion benchmarks for face discovery and picking.
//! Focus sizes: n×n jittered grids, n in {4, 8, 16, 32}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use facegraph::generate::{jittered_grid, GridCfg};
use facegraph::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn grid(n: usize) -> facegraph::Dataset {
    let cfg = GridCfg {
        rows: n,
        cols: n,
        jitter: 0.15,
        diagonal_prob: 0.5,
    };
    jittered_grid(cfg, 42)
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            b.iter_batched(
                || grid(n),
                |data| {
                    let _g = data.build_graph().unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("pick", n), &n, |b, &n| {
            let g = grid(n).build_graph().unwrap();
            let mut rng = StdRng::seed_from_u64(43);
            let pts: Vec<Vec2> = (0..256)
                .map(|_| Vec2::new(rng.gen_range(0.0..n as f64), rng.gen_range(0.0..n as f64)))
                .collect();
            b.iter(|| pts.iter().filter(|p| g.pick(**p).is_some()).count())
        });

        group.bench_with_input(BenchmarkId::new("bfs", n), &n, |b, &n| {
            let g = grid(n).build_graph().unwrap();
            b.iter(|| g.bfs_levels(facegraph::FaceId(0)).unwrap().len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph);
criterion_main!(benches);
